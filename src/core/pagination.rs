use serde_json::Value;
use sqlx::{postgres::PgRow, Postgres, Transaction};

use super::sqlx_utils::{binds_query_as, query_builder, SqlxBinds};

pub const INVALID_PAGE_PARAMS: &str = "Invalid page or limit parameters";

#[derive(Debug, Clone, PartialEq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
    pub filter: Option<String>,
}

impl PageParams {
    pub fn offset(&self) -> u32 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Describes the tables a listing reads from.
pub struct PageSource<'a> {
    pub select: &'a str,
    pub from: &'a str,
    pub filter_column: &'a str,
    pub order_by: &'a str,
}

#[derive(Debug, PartialEq)]
pub struct PageQuery {
    pub count_stmt: String,
    pub data_stmt: String,
    pub binds: Vec<SqlxBinds>,
}

fn parse_positive(value: Option<&Value>) -> Option<u32> {
    let parsed = match value? {
        Value::Number(num) => num.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    if parsed == 0 {
        return None;
    }
    u32::try_from(parsed).ok()
}

/// Read `page`, `limit` and the optional filter value out of a listing body.
pub fn parse_page_params(body: &Value, filter_key: &str) -> Result<PageParams, String> {
    let page = parse_positive(body.get("page"));
    let limit = parse_positive(body.get("limit"));
    let (page, limit) = match (page, limit) {
        (Some(page), Some(limit)) => (page, limit),
        _ => return Err(INVALID_PAGE_PARAMS.to_string()),
    };
    let filter = match body.get(filter_key) {
        None | Some(Value::Null) => None,
        Some(Value::String(val)) if val.is_empty() => None,
        Some(Value::String(val)) => Some(val.clone()),
        Some(_) => return Err(format!("{} must be a string", filter_key)),
    };
    Ok(PageParams {
        page,
        limit,
        filter,
    })
}

pub fn build_page(source: &PageSource, params: &PageParams) -> PageQuery {
    let mut binds: Vec<SqlxBinds> = vec![];
    let mut filters: Vec<String> = vec![];
    if let Some(filter) = &params.filter {
        binds.push(SqlxBinds::String(format!("%{}%", filter)));
        filters.push(format!("{} ILIKE ${}", source.filter_column, binds.len()));
    }

    let count_stmt = query_builder(
        Some("COUNT(*)".to_string()),
        source.from,
        &filters,
        &[],
        None,
        None,
    );
    let data_stmt = query_builder(
        Some(source.select.to_string()),
        source.from,
        &filters,
        &[source.order_by.to_string()],
        Some(params.limit),
        Some(params.offset()),
    );
    PageQuery {
        count_stmt,
        data_stmt,
        binds,
    }
}

pub fn total_pages(total: u32, limit: u32) -> u32 {
    total.div_ceil(limit)
}

/// Run both page queries and return `(items, total, total_pages)`.
pub async fn fetch_page<T>(
    tx: &mut Transaction<'_, Postgres>,
    source: &PageSource<'_>,
    params: &PageParams,
) -> anyhow::Result<(Vec<T>, u32, u32)>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let query = build_page(source, params);
    let q_count = binds_query_as::<(i64,)>(&query.count_stmt, query.binds.clone());
    let q = binds_query_as::<T>(&query.data_stmt, query.binds);
    let count = q_count.fetch_one(&mut **tx).await?;
    let data = q.fetch_all(&mut **tx).await?;
    let total = row_count(count.0)?;
    Ok((data, total, total_pages(total, params.limit)))
}

fn row_count(count: i64) -> anyhow::Result<u32> {
    u32::try_from(count).map_err(|_| anyhow::anyhow!("row count {} out of range", count))
}
