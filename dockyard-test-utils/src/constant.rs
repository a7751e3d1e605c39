/// Config category holding ship templates, keyed by template id.
pub const SHIP_TEMPLATE_CATEGORY: &str = "ShareCfg/ship_data_template.json";

pub const TEST_ACCOUNT_ID: i32 = 1000;
