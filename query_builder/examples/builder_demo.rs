// Demonstrates building the same conditions for all three dialects
use query_builder::prelude::*;

fn main() {
    let registry = DialectRegistry::default();

    let builder = ConditionBuilder::new()
        .eq("status", "active")
        .gt("age", 21)
        .or()
        .group(
            ConditionBuilder::new()
                .eq("role", "admin")
                .in_values("region", ["eu", "us"]),
        );

    for kind in [
        DatabaseKind::MySql,
        DatabaseKind::Postgres,
        DatabaseKind::ClickHouse,
    ] {
        let services = match registry.services(kind) {
            Ok(services) => services,
            Err(e) => {
                println!("❌ {}: {}", kind, e);
                continue;
            }
        };

        match builder.build(services) {
            Ok((fragment, args)) => {
                println!("{}: WHERE {}", kind, fragment);
                println!("  args: {:?}", args);
            }
            Err(e) => println!("❌ {}: {}", kind, e),
        }
    }

    // Function renderings diverge where the dialects do
    let day = Field::date_format("created_at").with_alias("day");
    for kind in [
        DatabaseKind::MySql,
        DatabaseKind::Postgres,
        DatabaseKind::ClickHouse,
    ] {
        if let Ok(services) = registry.services(kind) {
            match day.render(services) {
                Ok(sql) => println!("{}: SELECT {}", kind, sql),
                Err(e) => println!("{}: {}", kind, e),
            }
        }
    }

    // Pagination styles
    let pagination = Pager::new(2, 10).paginate();
    println!(
        "mysql pagination: {}",
        pagination.to_sql(LimitStyle::OffsetCommaLimit)
    );
    println!(
        "postgres pagination: {}",
        pagination.to_sql(LimitStyle::LimitOffset)
    );

    println!("Builder demo completed successfully! ✅");
}
