use sqlx::{Postgres, Transaction};

use crate::{
    core::{
        pagination::{fetch_page, PageParams, PageSource},
        sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    },
    model::product::{NewProduct, Product, ProductWithProfile, TABLE_NAME},
};

const PAGE_SOURCE: PageSource = PageSource {
    select: "p.product_id, p.product_name, p.category, p.price, \
             pp.ratings, pp.color, pp.brand",
    from: "public.product p LEFT JOIN public.product_profile pp ON p.product_id = pp.product_id",
    filter_column: "p.product_name",
    order_by: "p.product_id ASC",
};

pub async fn paginate_product(
    tx: &mut Transaction<'_, Postgres>,
    params: &PageParams,
) -> anyhow::Result<(Vec<ProductWithProfile>, u32, u32)> {
    fetch_page::<ProductWithProfile>(tx, &PAGE_SOURCE, params).await
}

pub async fn get_product_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<Product>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["product_id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, &[], None, None);
    let q = binds_query_as::<Product>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn get_product_by_id_for_update(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<Product>> {
    let data: Option<Product> = sqlx::query_as(
        format!(
            r#"SELECT product_id, product_name, category, price
        FROM {}
        WHERE product_id = $1
        FOR UPDATE"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data)
}

/// Existence check that keeps the product from being deleted until commit.
pub async fn product_exists(tx: &mut Transaction<'_, Postgres>, id: i32) -> anyhow::Result<bool> {
    let data: Option<(i32,)> = sqlx::query_as(
        format!(
            r#"SELECT product_id FROM {} WHERE product_id = $1 FOR SHARE"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data.is_some())
}

/// An explicit `product_id` that is already taken yields `None`.
pub async fn create_product(
    tx: &mut Transaction<'_, Postgres>,
    data: &NewProduct,
) -> anyhow::Result<Option<Product>> {
    let Some(id) = data.product_id else {
        let new_product: Product = sqlx::query_as(
            format!(
                r#"
    INSERT INTO {} (product_name, category, price)
    VALUES ($1, $2, $3)
    RETURNING product_id, product_name, category, price"#,
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(&data.product_name)
        .bind(&data.category)
        .bind(data.price)
        .fetch_one(&mut **tx)
        .await?;
        return Ok(Some(new_product));
    };

    let new_product: Option<Product> = sqlx::query_as(
        format!(
            r#"
    INSERT INTO {} (product_id, product_name, category, price)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (product_id) DO NOTHING
    RETURNING product_id, product_name, category, price"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(id)
    .bind(&data.product_name)
    .bind(&data.category)
    .bind(data.price)
    .fetch_optional(&mut **tx)
    .await?;
    if new_product.is_none() {
        return Ok(None);
    }

    // keep generated ids ahead of client supplied ones
    sqlx::query(
        format!(
            r#"SELECT setval(pg_get_serial_sequence('{0}', 'product_id'),
        (SELECT MAX(product_id) FROM {0}))"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .execute(&mut **tx)
    .await?;
    Ok(new_product)
}

pub async fn update_product(
    tx: &mut Transaction<'_, Postgres>,
    product: &Product,
) -> anyhow::Result<u64> {
    let res = sqlx::query(
        format!(
            r#"
        UPDATE {}
        SET product_name = $1, category = $2, price = $3
        WHERE product_id = $4"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&product.product_name)
    .bind(&product.category)
    .bind(product.price)
    .bind(product.product_id)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_product(tx: &mut Transaction<'_, Postgres>, id: i32) -> anyhow::Result<u64> {
    let stmt = format!("DELETE FROM {} WHERE product_id = $1", TABLE_NAME);
    let res = binds_query(&stmt, vec![SqlxBinds::Int(id)])
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
