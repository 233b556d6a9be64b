use log::Level;

pub const BRAND_NAME: &str = "CanTax Pro";
pub const BRAND_DESCRIPTION: &str = "Simplify your Canadian taxes";

pub const SUPPORT_EMAIL: &str = "support@cantaxpro.com";
pub const SUPPORT_PHONE: &str = "1-800-TAX-HELP";

/// Vertical offset (CSS px) the page must pass before the header switches style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Slice of the normalized scroll progress over which the features fade out.
pub const FADE_RANGE: (f64, f64) = (0.0, 0.2);

/// Delay between hero reveal stages, in milliseconds.
pub const HERO_STAGE_DELAY_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Builds the document title for a page, `None` meaning the bare brand name.
pub fn page_title(page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} | {}", page, BRAND_NAME),
        None => BRAND_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_appends_brand() {
        assert_eq!(page_title(Some("Dashboard")), "Dashboard | CanTax Pro");
        assert_eq!(page_title(None), "CanTax Pro");
    }
}
