#[cfg(test)]
mod tests {
    use anyhow::Error;
    use log::Level;
    use sqltrace::{
        DataType, GenericQuoter, Interpolated, ParamKey, Statement, Value, ValueRef, params,
    };
    use sqltrace_tests::{CaptureLogger, MockStatement, init_logs, silent_logs};
    use std::{fmt, sync::Arc};

    #[derive(Debug)]
    struct ConstraintViolation(&'static str);

    impl fmt::Display for ConstraintViolation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "constraint violated: {}", self.0)
        }
    }

    impl std::error::Error for ConstraintViolation {}

    #[test]
    fn execute_with_input_parameters() {
        init_logs();
        let logger = Arc::new(CaptureLogger::new());
        let mut stmt = MockStatement::new("SELECT ? + ? + ?, ?")
            .interpolated()
            .with_quoter(Arc::new(GenericQuoter))
            .with_logger(logger.clone());
        let executed = stmt
            .execute(Some(params![1, 1, 1, "test string"]))
            .expect("Execution should succeed");
        assert_eq!(stmt.full_query(), Some("SELECT 1 + 1 + 1, 'test string'"));
        assert_eq!(executed.len(), 4);
        assert_eq!(executed[&ParamKey::Index(4)], Value::from("test string"));

        // The statement receives the parameters, never the interpolated text
        let executions = stmt.statement().executions();
        assert_eq!(executions.len(), 1);
        assert_eq!(executions[0], Some(params![1, 1, 1, "test string"]));
        assert_eq!(stmt.statement().query(), "SELECT ? + ? + ?, ?");

        let info = logger.events_at(Level::Info);
        assert_eq!(info.len(), 1);
        assert_eq!(
            info[0].field("query"),
            Some("SELECT 1 + 1 + 1, 'test string'")
        );
        assert!(logger.events_at(Level::Error).is_empty());
    }

    #[test]
    fn execute_with_named_bindings() {
        init_logs();
        let num = ValueRef::new(3);
        let string = ValueRef::new("someString");
        let mut stmt = MockStatement::new("SELECT :num, :string")
            .interpolated()
            .with_quoter(Arc::new(GenericQuoter));
        stmt.bind_param(":num", &num, DataType::Int)
            .unwrap()
            .bind_param(":string", &string, DataType::Str)
            .unwrap();
        string.set("test string");
        let executed = stmt.execute(None).expect("Execution should succeed");
        assert_eq!(stmt.full_query(), Some("SELECT 3, 'test string'"));
        assert_eq!(executed[&ParamKey::name("num")], Value::from(3));
        assert_eq!(executed[&ParamKey::name("string")], Value::from("test string"));
        assert!(matches!(stmt.statement().executions(), [None]));
    }

    #[test]
    fn execute_interpolates_every_time() {
        init_logs();
        let id = ValueRef::new(1);
        let mut stmt = MockStatement::new("DELETE FROM t WHERE id = ?")
            .interpolated()
            .with_quoter(Arc::new(GenericQuoter));
        stmt.bind_param(1, &id, DataType::Int).unwrap();
        stmt.execute(None).unwrap();
        assert_eq!(stmt.full_query(), Some("DELETE FROM t WHERE id = 1"));
        id.set(2);
        stmt.execute(None).unwrap();
        assert_eq!(stmt.full_query(), Some("DELETE FROM t WHERE id = 2"));
        assert_eq!(stmt.statement().executions().len(), 2);
    }

    #[test]
    fn execution_failure_is_logged_and_returned_unchanged() {
        init_logs();
        let logger = Arc::new(CaptureLogger::new());
        let mut stmt = Interpolated::new(MockStatement::failing(
            "INSERT INTO users (id) VALUES (:id)",
            || Error::new(ConstraintViolation("users_pkey")),
        ))
        .with_quoter(Arc::new(GenericQuoter))
        .with_logger(logger.clone());
        stmt.bind_value(":id", 1, DataType::Int).unwrap();
        let mut result = Ok(Default::default());
        silent_logs! {
            result = stmt.execute(None);
        };
        let error = result.expect_err("Execution should fail");
        let violation = error
            .downcast_ref::<ConstraintViolation>()
            .expect("The original error should be returned");
        assert_eq!(violation.0, "users_pkey");
        assert_eq!(stmt.full_query(), Some("INSERT INTO users (id) VALUES (1)"));

        let errors = logger.events_at(Level::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].field("query"),
            Some("INSERT INTO users (id) VALUES (1)")
        );
        assert_eq!(
            errors[0].field("exception"),
            Some("constraint violated: users_pkey")
        );
        assert!(errors[0].message.contains("INSERT INTO users (id) VALUES (1)"));
        assert!(logger.events_at(Level::Info).is_empty());
    }

    #[test]
    fn execution_failure_without_logger() {
        init_logs();
        let mut stmt = Interpolated::new(MockStatement::failing("SELECT ?", || {
            Error::msg("connection lost")
        }));
        let error = stmt
            .execute(Some(params![1]))
            .expect_err("Execution should fail");
        assert_eq!(error.to_string(), "connection lost");
        assert_eq!(stmt.full_query(), Some("SELECT '1'"));
    }

    #[test]
    fn borrowed_statement() {
        init_logs();
        let mut prepared = MockStatement::new("SELECT :a");
        {
            let mut stmt = Interpolated::new(&mut prepared).with_quoter(Arc::new(GenericQuoter));
            stmt.bind_value("a", "x", DataType::Str).unwrap();
            stmt.execute(None).unwrap();
            assert_eq!(stmt.full_query(), Some("SELECT 'x'"));
        }
        assert_eq!(prepared.binds().len(), 1);
        assert_eq!(prepared.executions().len(), 1);
    }

    #[test]
    fn log_logger_forwards_to_log() {
        init_logs();
        let mut stmt = MockStatement::new("SELECT ?")
            .interpolated()
            .with_logger(Arc::new(sqltrace::LogLogger::new()));
        stmt.bind(1).unwrap();
        let executed = stmt.execute(None).unwrap();
        assert_eq!(executed[&ParamKey::Index(1)], Value::from(1));
    }
}
