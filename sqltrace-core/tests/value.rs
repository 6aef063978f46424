#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqltrace_core::{AsValue, DataType, Value, ValueRef};
    use std::str::FromStr;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(Option::<i64>::None.as_value().is_null());
        assert!(!Value::Varchar(Some("".into())).is_null());
        assert_eq!(Value::Int32(None).render_text(), None);
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(Some(true)));
        assert_eq!(Value::from(-5_i8), Value::Int8(Some(-5)));
        assert_eq!(Value::from(123), Value::Int32(Some(123)));
        assert_eq!(Value::from(123_u64), Value::UInt64(Some(123)));
        assert_eq!(Value::from("active"), Value::Varchar(Some("active".into())));
        assert_eq!(
            Value::from(String::from("active")),
            Value::Varchar(Some("active".into()))
        );
        assert_eq!(
            Value::from(vec![1_u8, 2, 3]),
            Value::Blob(Some(vec![1, 2, 3].into()))
        );
        assert_eq!(Value::from(Some(3_i16)), Value::Int16(Some(3)));
        assert_eq!(Value::from(Option::<String>::None), Value::Varchar(None));
    }

    #[test]
    fn value_render_text() {
        assert_eq!(Value::from(123).render_text().as_deref(), Some("123"));
        assert_eq!(Value::from(-9_i64).render_text().as_deref(), Some("-9"));
        assert_eq!(Value::from(true).render_text().as_deref(), Some("1"));
        assert_eq!(Value::from(false).render_text().as_deref(), Some("0"));
        assert_eq!(Value::from(1.5_f64).render_text().as_deref(), Some("1.5"));
        assert_eq!(Value::from(2.0_f32).render_text().as_deref(), Some("2"));
        assert_eq!(Value::from(0.25_f32).render_text().as_deref(), Some("0.25"));
        assert_eq!(
            Value::from(Decimal::from_str("12.340").unwrap())
                .render_text()
                .as_deref(),
            Some("12.340")
        );
        assert_eq!(
            Value::from("O'Brien").render_text().as_deref(),
            Some("O'Brien")
        );
        assert_eq!(
            Value::from(date!(2024 - 03 - 07)).render_text().as_deref(),
            Some("2024-03-07")
        );
        assert_eq!(
            Value::from(time!(09:05:00)).render_text().as_deref(),
            Some("09:05:00")
        );
        assert_eq!(
            Value::from(time!(09:05:00.25)).render_text().as_deref(),
            Some("09:05:00.25")
        );
        assert_eq!(
            Value::from(datetime!(2024-03-07 23:59:01))
                .render_text()
                .as_deref(),
            Some("2024-03-07 23:59:01")
        );
        let uuid = Uuid::from_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            Value::from(uuid).render_text().as_deref(),
            Some("67e55044-10b1-426f-9247-bb680e5fe0c8")
        );
    }

    #[test]
    fn value_to_integer() {
        assert_eq!(Value::from(123).to_integer(), 123);
        assert_eq!(Value::from(u64::MAX).to_integer(), i64::MAX);
        assert_eq!(Value::from(true).to_integer(), 1);
        assert_eq!(Value::from(-3.9_f64).to_integer(), -3);
        assert_eq!(Value::from(f64::NAN).to_integer(), 0);
        assert_eq!(
            Value::from(Decimal::from_str("-41.99").unwrap()).to_integer(),
            -41
        );
        assert_eq!(Value::from("42").to_integer(), 42);
        assert_eq!(Value::from("  -17 apples").to_integer(), -17);
        assert_eq!(Value::from("+8").to_integer(), 8);
        assert_eq!(Value::from("apples").to_integer(), 0);
        assert_eq!(Value::from("").to_integer(), 0);
        assert_eq!(Value::from("99999999999999999999").to_integer(), i64::MAX);
        assert_eq!(Value::from(date!(2024 - 03 - 07)).to_integer(), 2024);
        assert_eq!(Value::Null.to_integer(), 0);
    }

    #[test]
    fn data_type_of() {
        assert_eq!(DataType::of(&Value::Null), DataType::Null);
        assert_eq!(DataType::of(&Value::from(1)), DataType::Int);
        assert_eq!(DataType::of(&Value::from(1_u8)), DataType::Int);
        assert_eq!(DataType::of(&Value::Int64(None)), DataType::Int);
        assert_eq!(DataType::of(&Value::from(false)), DataType::Bool);
        assert_eq!(DataType::of(&Value::from(1.0)), DataType::Str);
        assert_eq!(DataType::of(&Value::from("x")), DataType::Str);
        assert_eq!(DataType::of(&Value::from(vec![0_u8])), DataType::Lob);
        assert_eq!(DataType::default(), DataType::Str);
        assert_eq!(DataType::Int.to_string(), "INT");
    }

    #[test]
    fn value_ref_aliases() {
        let value = ValueRef::new(1);
        let alias = value.clone();
        assert!(value.ptr_eq(&alias));
        alias.set("changed");
        assert_eq!(value.get(), Value::Varchar(Some("changed".into())));
        assert!(!value.ptr_eq(&ValueRef::new(1)));
        assert_eq!(ValueRef::default().get(), Value::Null);
    }
}
