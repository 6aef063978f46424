#[cfg(test)]
mod tests {
    use log::Level;
    use sqltrace_core::{Fields, LogLogger, Logger, fields, render, truncate, truncate_long};

    #[test]
    fn render_fields() {
        let query = "SELECT 1";
        let fields: Fields = fields![query = query, count = 3];
        assert_eq!(render("Ran {query} {count} times", fields), "Ran SELECT 1 3 times");
        assert_eq!(render("{unknown} stays", fields), "{unknown} stays");
        assert_eq!(render("no placeholders", fields), "no placeholders");
        assert_eq!(render("open { brace", fields), "open { brace");
        assert_eq!(render("{query}{query}", fields), "SELECT 1SELECT 1");
        assert_eq!(render("{count}", fields![]), "{count}");
    }

    #[test]
    fn log_logger() {
        let logger = LogLogger::new();
        assert_eq!(logger.target(), "sqltrace");
        assert_eq!(LogLogger::default().target(), "sqltrace");
        let logger = LogLogger::with_target("app::sql");
        assert_eq!(logger.target(), "app::sql");
        logger.log(Level::Info, "Executed query: {query}", fields![query = "SELECT 1"]);
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("short", 497), "short");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ééé", 3), "é");
        let long = "x".repeat(600);
        let truncated = format!("{}", truncate_long!(long));
        assert_eq!(truncated.len(), 500);
        assert!(truncated.ends_with("..."));
        assert_eq!(format!("{}", truncate_long!("SELECT 1 ")), "SELECT 1");
    }
}
