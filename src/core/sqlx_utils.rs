use sqlx::{
    postgres::{PgArguments, PgRow},
    query::{Query, QueryAs},
    Postgres,
};

#[derive(Clone, Debug, PartialEq)]
pub enum SqlxBinds {
    String(String),
    Int(i32),
}

pub fn binds_query(stmt: &str, binds: Vec<SqlxBinds>) -> Query<'_, Postgres, PgArguments> {
    let mut q: Query<'_, Postgres, PgArguments> = sqlx::query(stmt);
    for bind in binds.iter() {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val.clone()),
            SqlxBinds::Int(val) => q.bind(*val),
        };
    }
    q
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, PgRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Postgres, T, PgArguments> {
    let mut q: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(stmt);
    for bind in binds.iter() {
        q = match bind {
            SqlxBinds::String(val) => q.bind(val.clone()),
            SqlxBinds::Int(val) => q.bind(*val),
        };
    }
    q
}

/// Assemble a SELECT statement. Filters are AND-ed, placeholders are the
/// caller's business.
pub fn query_builder(
    select: Option<String>,
    from: &str,
    wheres: &[String],
    order_by: &[String],
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    let mut clauses: Vec<String> = vec![format!(
        "SELECT {} FROM {}",
        select.as_deref().unwrap_or("*"),
        from
    )];
    if !wheres.is_empty() {
        clauses.push(format!("WHERE {}", wheres.join(" AND ")));
    }
    if !order_by.is_empty() {
        clauses.push(format!("ORDER BY {}", order_by.join(", ")));
    }
    if let Some(val) = limit {
        clauses.push(format!("LIMIT {}", val));
    }
    if let Some(val) = offset {
        clauses.push(format!("OFFSET {}", val));
    }
    clauses.join(" ")
}
