/// Last school day used when the sheet has no `end_school_date`.
pub const DEFAULT_END_SCHOOL_DATE: &str = "2025-06-30";

/// Last work day used when the sheet has no `end_work_date`.
pub const DEFAULT_END_WORK_DATE: &str = "2025-12-31";

pub const DEFAULT_MESSAGE: &str = "¡Que tengas un gran día!";

pub const SCHOOL_END_TITLE: &str = "Último día lectivo";
pub const WORK_END_TITLE: &str = "Último día laborable";

/// Keys starting with this prefix are events; the rest of the key is the title.
pub const EVENT_PREFIX: &str = "evento";

pub const DEFAULT_SHEET_ID: &str = "1QLYmSVPq8-uHr1mY9qCUjbWKDicGDGKWVIcjQjm9Mpk";
pub const DEFAULT_SHEET_TAB: &str = "mensajes";
pub const DEFAULT_BASE_URL: &str = "https://opensheet.elk.sh";

/// Marker left in templates for a sheet id that was never filled in.
pub const SHEET_ID_PLACEHOLDER: &str = "<TU_SHEET_ID>";

pub const DEFAULT_REFRESH_MINUTES: u64 = 15;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// One week.
pub const MAX_REFRESH_MINUTES: u64 = 7 * 24 * 60;
