use sqlx::{Postgres, Transaction};

use crate::{
    core::{
        pagination::{fetch_page, PageParams, PageSource},
        sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    },
    model::user_profile::{UserProfile, UserProfileWithUser, TABLE_NAME},
};

const PAGE_SOURCE: PageSource = PageSource {
    select: "p.user_id, p.age, p.address, p.contact_number, p.pnn_number, \
             u.firstname, u.lastname, u.email",
    from: "public.user_profile p LEFT JOIN public.user u ON p.user_id = u.user_id",
    filter_column: "p.address",
    order_by: "p.user_id ASC",
};

pub async fn paginate_user_profile(
    tx: &mut Transaction<'_, Postgres>,
    params: &PageParams,
) -> anyhow::Result<(Vec<UserProfileWithUser>, u32, u32)> {
    fetch_page::<UserProfileWithUser>(tx, &PAGE_SOURCE, params).await
}

pub async fn get_user_profile_by_user_id(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
) -> anyhow::Result<Option<UserProfile>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(user_id)];
    let filters: Vec<String> = vec!["user_id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, &[], None, None);
    let q = binds_query_as::<UserProfile>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

pub async fn get_user_profile_by_user_id_for_update(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
) -> anyhow::Result<Option<UserProfile>> {
    let data: Option<UserProfile> = sqlx::query_as(
        format!(
            r#"SELECT user_id, age, address, contact_number, pnn_number
        FROM {}
        WHERE user_id = $1
        FOR UPDATE"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data)
}

/// Returns `None` when the user already has a profile, including one inserted
/// by a concurrent transaction that committed first.
pub async fn create_user_profile(
    tx: &mut Transaction<'_, Postgres>,
    data: &UserProfile,
) -> anyhow::Result<Option<UserProfile>> {
    let new_profile: Option<UserProfile> = sqlx::query_as(
        format!(
            r#"
    INSERT INTO {} (user_id, age, address, contact_number, pnn_number)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (user_id) DO NOTHING
    RETURNING user_id, age, address, contact_number, pnn_number"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.user_id)
    .bind(data.age)
    .bind(&data.address)
    .bind(&data.contact_number)
    .bind(&data.pnn_number)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(new_profile)
}

pub async fn update_user_profile(
    tx: &mut Transaction<'_, Postgres>,
    profile: &UserProfile,
) -> anyhow::Result<u64> {
    let res = sqlx::query(
        format!(
            r#"
        UPDATE {}
        SET age = $1, address = $2, contact_number = $3, pnn_number = $4
        WHERE user_id = $5"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(profile.age)
    .bind(&profile.address)
    .bind(&profile.contact_number)
    .bind(&profile.pnn_number)
    .bind(profile.user_id)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_user_profile(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
) -> anyhow::Result<u64> {
    let stmt = format!("DELETE FROM {} WHERE user_id = $1", TABLE_NAME);
    let res = binds_query(&stmt, vec![SqlxBinds::Int(user_id)])
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
