#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleApi,
    ConfigModuleReport,
    ApiNotConfigured,

    // === PERIOD MESSAGES ===
    WeeksHeader(String),    // month label
    NoWeeksInMonth(String), // month label
    WeekOption(usize, String), // index, range label
    PeriodResolved(String, String), // report type, period

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // title, period
    NoDataAvailable,
    LoadedEmployeeRecords(usize),
    SummaryStats {
        present_employees: usize,
        total_records: usize,
        total_hours: f64,
    },
    TotalTimeWorked(String),
    StartAfterEnd(String, String), // start, end

    // === RECORD SOURCE MESSAGES ===
    LoadingRecords(String), // source description
    RecordsLoaded(usize),
    InputFileReadFailed(String, String), // path, error
    OpenSessions(usize),

    // === ENTRY MESSAGES ===
    EntryCreated(String, String),    // emp id, check-in
    CheckoutUpdated(String, String, String), // name, check-out, time worked

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoDataToExport,

    // === API MESSAGES ===
    ApiRequestFailed(String),   // status
    ApiErrorResponse(String),   // error text from the API

    // === DURATION MESSAGES ===
    DurationAsMinutes(String, u64),
    DurationAsDisplay(u64, String),

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiUrl,
    PromptCompanyId,
    PromptDeviceId,
}
