use sqlx::{Postgres, Transaction};

use crate::{
    core::{
        pagination::{fetch_page, PageParams, PageSource},
        sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    },
    model::product_profile::{ProductProfile, ProductProfileWithProduct, TABLE_NAME},
};

const PAGE_SOURCE: PageSource = PageSource {
    select: "pp.product_id, pp.ratings, pp.color, pp.brand, \
             p.product_name, p.category, p.price",
    from: "public.product_profile pp LEFT JOIN public.product p ON pp.product_id = p.product_id",
    filter_column: "pp.brand",
    order_by: "pp.product_id ASC",
};

pub async fn paginate_product_profile(
    tx: &mut Transaction<'_, Postgres>,
    params: &PageParams,
) -> anyhow::Result<(Vec<ProductProfileWithProduct>, u32, u32)> {
    fetch_page::<ProductProfileWithProduct>(tx, &PAGE_SOURCE, params).await
}

pub async fn get_product_profile_by_product_id(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
) -> anyhow::Result<Option<ProductProfile>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(product_id)];
    let filters: Vec<String> = vec!["product_id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, &[], None, None);
    let q = binds_query_as::<ProductProfile>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn get_product_profile_by_product_id_for_update(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
) -> anyhow::Result<Option<ProductProfile>> {
    let data: Option<ProductProfile> = sqlx::query_as(
        format!(
            r#"SELECT product_id, ratings, color, brand
        FROM {}
        WHERE product_id = $1
        FOR UPDATE"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(product_id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data)
}

/// `None` means the product already has a profile.
pub async fn create_product_profile(
    tx: &mut Transaction<'_, Postgres>,
    data: &ProductProfile,
) -> anyhow::Result<Option<ProductProfile>> {
    let new_profile: Option<ProductProfile> = sqlx::query_as(
        format!(
            r#"
    INSERT INTO {} (product_id, ratings, color, brand)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (product_id) DO NOTHING
    RETURNING product_id, ratings, color, brand"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.product_id)
    .bind(data.ratings)
    .bind(&data.color)
    .bind(&data.brand)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(new_profile)
}

pub async fn update_product_profile(
    tx: &mut Transaction<'_, Postgres>,
    profile: &ProductProfile,
) -> anyhow::Result<u64> {
    let res = sqlx::query(
        format!(
            r#"
        UPDATE {}
        SET ratings = $1, color = $2, brand = $3
        WHERE product_id = $4"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(profile.ratings)
    .bind(&profile.color)
    .bind(&profile.brand)
    .bind(profile.product_id)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_product_profile(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
) -> anyhow::Result<u64> {
    let stmt = format!("DELETE FROM {} WHERE product_id = $1", TABLE_NAME);
    let res = binds_query(&stmt, vec![SqlxBinds::Int(product_id)])
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
