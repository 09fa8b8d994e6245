//! Query builder edge cases
//!
//! Build semantics across all three dialects.

#[cfg(test)]
mod tests {
    use crate::builder::ConditionBuilder;
    use crate::condition::Operator;
    use crate::dialects::{DatabaseKind, DialectServices};
    use crate::errors::BuilderError;
    use crate::fields::{select_clause, Field};
    use crate::pagination::Pager;
    use crate::registry::DialectRegistry;
    use serde_json::json;

    // ========================================
    // Connective Precedence
    // ========================================

    #[test]
    fn test_and_siblings_render_bare() {
        let services = DialectServices::mysql();
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .eq("b", 2)
            .eq("c", 3)
            .build(&services)
            .unwrap();
        assert_eq!(query, "(`a` = ? AND `b` = ? AND `c` = ?)");
    }

    #[test]
    fn test_or_siblings_parenthesize_both_sides() {
        let services = DialectServices::mysql();
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .or()
            .eq("b", 2)
            .build(&services)
            .unwrap();
        assert_eq!(query, "((`a` = ?) OR (`b` = ?))");
    }

    #[test]
    fn test_and_then_or_wraps_accumulated_left_side() {
        let services = DialectServices::mysql();
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .gt("b", 2)
            .or()
            .eq("c", 3)
            .build(&services)
            .unwrap();
        assert_eq!(query, "((`a` = ? AND `b` > ?) OR (`c` = ?))");
    }

    #[test]
    fn test_or_then_and_follows_sql_precedence() {
        // AND binds tighter; the accumulated OR pair stays as emitted
        let services = DialectServices::mysql();
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .or()
            .eq("b", 2)
            .gt("c", 3)
            .build(&services)
            .unwrap();
        assert_eq!(query, "((`a` = ?) OR (`b` = ?) AND `c` > ?)");
    }

    // ========================================
    // Empty Inputs
    // ========================================

    #[test]
    fn test_empty_builder_builds_empty() {
        let services = DialectServices::postgres();
        let (query, args) = ConditionBuilder::new().build(&services).unwrap();
        assert_eq!(query, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_empty_in_renders_constant_false() {
        let services = DialectServices::mysql();
        let (query, args) = ConditionBuilder::new()
            .in_values("id", Vec::<i64>::new())
            .build(&services)
            .unwrap();
        assert_eq!(query, "(1=0)");
        assert!(args.is_empty());
    }

    #[test]
    fn test_empty_not_in_renders_constant_true() {
        let services = DialectServices::mysql();
        let (query, args) = ConditionBuilder::new()
            .not_in_values("id", Vec::<i64>::new())
            .build(&services)
            .unwrap();
        assert_eq!(query, "(1=1)");
        assert!(args.is_empty());
    }

    // ========================================
    // Nested Groups
    // ========================================

    #[test]
    fn test_nested_group_wraps_once() {
        let services = DialectServices::mysql();
        let group = ConditionBuilder::new().eq("b", 2).or().eq("c", 3);
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .group(group)
            .build(&services)
            .unwrap();
        assert_eq!(query, "(`a` = ? AND ((`b` = ?) OR (`c` = ?)))");
    }

    #[test]
    fn test_group_with_or_connective() {
        let services = DialectServices::mysql();
        let group = ConditionBuilder::new().eq("b", 2).eq("c", 3);
        let (query, _) = ConditionBuilder::new()
            .eq("a", 1)
            .or()
            .group(group)
            .build(&services)
            .unwrap();
        assert_eq!(query, "((`a` = ?) OR ((`b` = ? AND `c` = ?)))");
    }

    #[test]
    fn test_argument_order_across_nested_groups() {
        let services = DialectServices::mysql();
        let group = ConditionBuilder::new().eq("b", 2).or().eq("c", 3);
        let (query, args) = ConditionBuilder::new()
            .eq("a", 1)
            .group(group)
            .gt("d", 4)
            .build(&services)
            .unwrap();
        assert_eq!(
            query,
            "(`a` = ? AND ((`b` = ?) OR (`c` = ?)) AND `d` > ?)"
        );
        assert_eq!(args, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_groups_nest_recursively() {
        let services = DialectServices::mysql();
        let innermost = ConditionBuilder::new().eq("c", 3);
        let inner = ConditionBuilder::new().eq("b", 2).group(innermost);
        let (query, args) = ConditionBuilder::new()
            .eq("a", 1)
            .group(inner)
            .build(&services)
            .unwrap();
        assert_eq!(query, "(`a` = ? AND (`b` = ? AND (`c` = ?)))");
        assert_eq!(args, vec![json!(1), json!(2), json!(3)]);
    }

    // ========================================
    // Identifier Quoting
    // ========================================

    #[test]
    fn test_dotted_field_quotes_each_segment() {
        let mysql = DialectServices::mysql();
        let postgres = DialectServices::postgres();

        let (query, _) = ConditionBuilder::new()
            .eq("users.name", "alice")
            .build(&mysql)
            .unwrap();
        assert_eq!(query, "(`users`.`name` = ?)");

        let (query, _) = ConditionBuilder::new()
            .eq("users.name", "alice")
            .build(&postgres)
            .unwrap();
        assert_eq!(query, "(\"users\".\"name\" = ?)");
    }

    #[test]
    fn test_injection_attempt_is_quoted_and_parameterized() {
        let services = DialectServices::mysql();
        let (query, args) = ConditionBuilder::new()
            .eq("name", "'; DROP TABLE users; --")
            .build(&services)
            .unwrap();
        assert_eq!(query, "(`name` = ?)");
        assert_eq!(args, vec![json!("'; DROP TABLE users; --")]);
    }

    // ========================================
    // Dialect Operator Tables
    // ========================================

    #[test]
    fn test_ne_renders_per_dialect() {
        let (query, _) = ConditionBuilder::new()
            .ne("age", 30)
            .build(&DialectServices::mysql())
            .unwrap();
        assert_eq!(query, "(`age` != ?)");

        let (query, _) = ConditionBuilder::new()
            .ne("age", 30)
            .build(&DialectServices::clickhouse())
            .unwrap();
        assert_eq!(query, "(`age` <> ?)");
    }

    #[test]
    fn test_ilike_on_postgres() {
        let (query, _) = ConditionBuilder::new()
            .ilike("name", "%ali%")
            .build(&DialectServices::postgres())
            .unwrap();
        assert_eq!(query, "(\"name\" ILIKE ?)");
    }

    #[test]
    fn test_blank_tests_on_clickhouse() {
        let services = DialectServices::clickhouse();
        let (query, args) = ConditionBuilder::new()
            .blank("name")
            .or()
            .not_blank("email")
            .build(&services)
            .unwrap();
        assert_eq!(query, "((`name` = '') OR (`email` <> ''))");
        assert!(args.is_empty());
    }

    #[test]
    fn test_between_renders_two_placeholders() {
        let services = DialectServices::postgres();
        let (query, args) = ConditionBuilder::new()
            .between("age", 18, 65)
            .build(&services)
            .unwrap();
        assert_eq!(query, "(\"age\" BETWEEN ? AND ?)");
        assert_eq!(args, vec![json!(18), json!(65)]);
    }

    #[test]
    fn test_in_list_placeholders_match_values() {
        let services = DialectServices::mysql();
        let (query, args) = ConditionBuilder::new()
            .in_values("id", [1, 2, 3])
            .build(&services)
            .unwrap();
        assert_eq!(query, "(`id` IN (?, ?, ?))");
        assert_eq!(args, vec![json!(1), json!(2), json!(3)]);
    }

    // ========================================
    // Unsupported Operators
    // ========================================

    #[test]
    fn test_ilike_unsupported_on_mysql() {
        let err = ConditionBuilder::new()
            .ilike("name", "%x%")
            .build(&DialectServices::mysql())
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::UnsupportedOperator {
                kind: DatabaseKind::MySql,
                operator: Operator::ILike,
            }
        );
    }

    #[test]
    fn test_pattern_and_range_unsupported_on_clickhouse() {
        let services = DialectServices::clickhouse();

        let err = ConditionBuilder::new()
            .like("name", "%x%")
            .build(&services)
            .unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedOperator { .. }));

        let err = ConditionBuilder::new()
            .between("age", 1, 2)
            .build(&services)
            .unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedOperator { .. }));

        let err = ConditionBuilder::new()
            .is_null("deleted_at")
            .build(&services)
            .unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedOperator { .. }));
    }

    #[test]
    fn test_blank_unsupported_outside_clickhouse() {
        let err = ConditionBuilder::new()
            .blank("name")
            .build(&DialectServices::postgres())
            .unwrap_err();
        assert_eq!(
            err,
            BuilderError::UnsupportedOperator {
                kind: DatabaseKind::Postgres,
                operator: Operator::Blank,
            }
        );
    }

    // ========================================
    // Invalid Operands
    // ========================================

    #[test]
    fn test_binary_operator_without_value() {
        let services = DialectServices::mysql();
        let err = ConditionBuilder::new()
            .append("age", Operator::Eq, None)
            .build(&services)
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidOperand { .. }));
    }

    #[test]
    fn test_between_requires_two_bounds() {
        let services = DialectServices::mysql();
        let err = ConditionBuilder::new()
            .append("age", Operator::Between, Some(json!([18])))
            .build(&services)
            .unwrap_err();
        assert!(matches!(
            err,
            BuilderError::InvalidOperand {
                operator: Operator::Between,
                ..
            }
        ));
    }

    #[test]
    fn test_in_requires_array_value() {
        let services = DialectServices::mysql();
        let err = ConditionBuilder::new()
            .append("id", Operator::In, Some(json!(5)))
            .build(&services)
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidOperand { .. }));
    }

    // ========================================
    // Function Renderings
    // ========================================

    #[test]
    fn test_date_format_diverges_per_dialect() {
        let field = Field::date_format("created_at").with_alias("day");

        assert_eq!(
            field.render(&DialectServices::mysql()).unwrap(),
            "DATE_FORMAT(`created_at`, '%Y-%m-%d %H:%i:%s') AS day"
        );
        assert_eq!(
            field.render(&DialectServices::postgres()).unwrap(),
            "to_char(\"created_at\", 'YYYY-MM-DD HH24:MI:SS') AS day"
        );
        assert_eq!(
            field.render(&DialectServices::clickhouse()).unwrap(),
            "formatDateTime(`created_at`, '%Y-%m-%d %H:%M:%S') AS day"
        );
    }

    #[test]
    fn test_group_concat_diverges_per_dialect() {
        let field = Field::group_concat("tag");

        assert_eq!(
            field.render(&DialectServices::mysql()).unwrap(),
            "group_concat(`tag` Separator ',')"
        );
        assert_eq!(
            field.render(&DialectServices::postgres()).unwrap(),
            "string_agg(\"tag\"::text, ',')"
        );
        assert_eq!(
            field.render(&DialectServices::clickhouse()).unwrap(),
            "arrayStringConcat(groupArray(toString(`tag`)), ',')"
        );
    }

    #[test]
    fn test_to_datetime_is_clickhouse_only() {
        let field = Field::to_datetime("ts");

        assert_eq!(
            field.render(&DialectServices::clickhouse()).unwrap(),
            "toDateTime(`ts`)"
        );
        let err = field.render(&DialectServices::mysql()).unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedFunction { .. }));
        let err = field.render(&DialectServices::postgres()).unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedFunction { .. }));
    }

    #[test]
    fn test_select_list_with_aggregates() {
        let services = DialectServices::postgres();
        let fields = vec![
            Field::new("department"),
            Field::count_all().with_alias("total"),
            Field::avg("salary").with_alias("avg_salary"),
        ];
        assert_eq!(
            select_clause(&fields, &services).unwrap(),
            "\"department\", count(*) AS total, avg(\"salary\") AS avg_salary"
        );
    }

    // ========================================
    // Pagination Across Dialects
    // ========================================

    #[test]
    fn test_page_two_renders_per_dialect() {
        let pagination = Pager::new(2, 10).paginate();

        let mysql = DialectServices::mysql();
        assert_eq!(pagination.to_sql(mysql.limit_style()), "LIMIT 20,10");

        let postgres = DialectServices::postgres();
        assert_eq!(pagination.to_sql(postgres.limit_style()), "LIMIT 10 OFFSET 20");

        let clickhouse = DialectServices::clickhouse();
        assert_eq!(pagination.to_sql(clickhouse.limit_style()), "LIMIT 10 OFFSET 20");
    }

    // ========================================
    // Registry Dispatch
    // ========================================

    #[test]
    fn test_build_through_registry_lookup() {
        let registry = DialectRegistry::default();
        let services = registry.services(DatabaseKind::ClickHouse).unwrap();
        let (query, _) = ConditionBuilder::new()
            .ne("age", 30)
            .build(services)
            .unwrap();
        assert_eq!(query, "(`age` <> ?)");
    }

    #[test]
    fn test_same_builder_builds_for_every_registered_dialect() {
        let registry = DialectRegistry::default();
        let builder = ConditionBuilder::new().eq("status", "active").gt("age", 21);

        for kind in registry.kinds() {
            let services = registry.services(kind).unwrap();
            let (query, args) = builder.build(services).unwrap();
            assert!(query.starts_with('('));
            assert!(query.ends_with(')'));
            assert_eq!(args.len(), 2);
        }
    }

    // ========================================
    // Conditional Expressions
    // ========================================

    #[test]
    fn test_if_else_per_dialect() {
        assert_eq!(
            DialectServices::mysql().if_else("`age` > 18"),
            "IF(`age` > 18, true, false)"
        );
        assert_eq!(
            DialectServices::postgres().if_else("\"age\" > 18"),
            "CASE WHEN \"age\" > 18 THEN true ELSE false END"
        );
        assert_eq!(
            DialectServices::clickhouse().if_else("`age` > 18"),
            "if(`age` > 18, true, false)"
        );
    }
}
