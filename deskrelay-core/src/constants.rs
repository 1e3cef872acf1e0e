pub const CREDENTIALS_FILE_NAME: &'static str = "credentials.json";
pub const TEMPLATES_FILE_NAME: &'static str = "templates.json";
pub const TICKET_OUTPUT_FILE_NAME: &'static str = "ticketOutput.json";

pub const VIEWS_DIR_NAME: &'static str = "views";
pub const STATIC_PREFIX_PATH: &'static str = "/static";

pub const DESKRELAY_DEFAULT_ROOT_PATH: &'static str = ".";
pub const DESKRELAY_DEFAULT_API_PORT: u16 = 1234;
