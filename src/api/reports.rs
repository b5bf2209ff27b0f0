use crate::libs::attendance::{records_from_value, AttendanceRecord};
use crate::libs::config::ApiConfig;
use crate::libs::entry::{format_timestamp, CheckoutUpdate, EntryPayload, NewEntry};
use crate::libs::messages::Message;
use crate::libs::period::ReportPeriod;
use crate::{msg_debug, msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

const DAILY_REPORT_URL: &str = "report/dailyReportGet";
const DATE_RANGE_REPORT_URL: &str = "report/dateRangeReportGet";
const CREATE_ENTRY_URL: &str = "report/dailyReportPost";
const UPDATE_ENTRY_URL: &str = "report/dailyReportUpdate";

/// Client for the attendance report endpoints.
pub struct ReportsApi {
    client: Client,
    config: ApiConfig,
}

impl ReportsApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    pub fn daily_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url(),
            DAILY_REPORT_URL,
            self.config.company_id,
            date.format("%Y-%m-%d")
        )
    }

    pub fn date_range_url(&self, period: &ReportPeriod) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            DATE_RANGE_REPORT_URL,
            self.config.company_id,
            period.start.format("%Y-%m-%d"),
            period.end.format("%Y-%m-%d")
        )
    }

    pub fn create_entry_url(&self) -> String {
        format!("{}/{}", self.base_url(), CREATE_ENTRY_URL)
    }

    /// Entries are addressed by employee id, company and check-in timestamp.
    pub fn update_entry_url(&self, emp_id: &str, check_in: &NaiveDateTime) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base_url(),
            UPDATE_ENTRY_URL,
            emp_id,
            self.config.company_id,
            format_timestamp(check_in)
        )
    }

    /// Attendance records of a single day.
    pub async fn daily(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.fetch(&self.daily_url(date)).await
    }

    /// Attendance records between the period's start and end dates.
    pub async fn date_range(&self, period: &ReportPeriod) -> Result<Vec<AttendanceRecord>> {
        self.fetch(&self.date_range_url(period)).await
    }

    /// Stores a manual entry for the configured company and returns the body that was sent.
    pub async fn create_entry(&self, entry: &NewEntry, modified_by: &str) -> Result<EntryPayload> {
        let payload = entry.payload(&self.config.company_id, modified_by)?;
        let url = self.create_entry_url();
        msg_debug!(format!("POST {}", url));
        self.send(self.client.post(&url).json(&payload)).await?;
        Ok(payload)
    }

    /// Closes an open session.
    pub async fn update_checkout(&self, update: &CheckoutUpdate) -> Result<()> {
        let url = self.update_entry_url(&update.emp_id, &update.check_in);
        msg_debug!(format!("PUT {}", url));
        self.send(self.client.put(&url).json(&update.payload)).await
    }

    fn base_url(&self) -> &str {
        self.config.api_url.trim_end_matches('/')
    }

    async fn fetch(&self, url: &str) -> Result<Vec<AttendanceRecord>> {
        msg_debug!(format!("GET {}", url));
        let res = self.client.get(url).send().await?;

        if !res.status().is_success() {
            return Err(msg_error_anyhow!(Message::ApiRequestFailed(res.status().to_string())));
        }

        let body: Value = res.json().await?;
        Ok(records_from_body(body)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<()> {
        let res = request.send().await?;
        if !res.status().is_success() {
            return Err(msg_error_anyhow!(Message::ApiRequestFailed(res.status().to_string())));
        }
        Ok(())
    }
}

/// Decodes a report response body.
///
/// The API answers `{"error": ...}` instead of an array when it cannot
/// produce a report; that is reported and treated as an empty report.
pub fn records_from_body(body: Value) -> Result<Vec<AttendanceRecord>> {
    if let Some(error) = body.as_object().and_then(|object| object.get("error")) {
        let error = match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        msg_warning!(Message::ApiErrorResponse(error));
        return Ok(Vec::new());
    }
    Ok(records_from_value(body)?)
}
