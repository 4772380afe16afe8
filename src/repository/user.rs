use sqlx::{Postgres, Transaction};

use crate::{
    core::{
        pagination::{fetch_page, PageParams, PageSource},
        sqlx_utils::{binds_query, binds_query_as, query_builder, SqlxBinds},
    },
    model::user::{NewUser, User, UserWithProfile, TABLE_NAME},
};

const PAGE_SOURCE: PageSource = PageSource {
    select: "u.user_id, u.firstname, u.lastname, u.email, u.password, \
             p.age, p.address, p.contact_number, p.pnn_number",
    from: "public.user u LEFT JOIN public.user_profile p ON u.user_id = p.user_id",
    filter_column: "u.firstname",
    order_by: "u.user_id ASC",
};

pub async fn paginate_user(
    tx: &mut Transaction<'_, Postgres>,
    params: &PageParams,
) -> anyhow::Result<(Vec<UserWithProfile>, u32, u32)> {
    fetch_page::<UserWithProfile>(tx, &PAGE_SOURCE, params).await
}

pub async fn get_user_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<User>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["user_id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, &[], None, None);
    let q = binds_query_as::<User>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

/// Fetch and lock the row until the transaction ends.
pub async fn get_user_by_id_for_update(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<User>> {
    let data: Option<User> = sqlx::query_as(
        format!(
            r#"SELECT user_id, firstname, lastname, email, password
        FROM {}
        WHERE user_id = $1
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

/// Existence check that keeps the user from being deleted until commit.
pub async fn user_exists(tx: &mut Transaction<'_, Postgres>, id: i32) -> anyhow::Result<bool> {
    let data: Option<(i32,)> = sqlx::query_as(
        format!(
            r#"SELECT user_id FROM {} WHERE user_id = $1 FOR SHARE"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data.is_some())
}

pub async fn create_user(
    tx: &mut Transaction<'_, Postgres>,
    data: &NewUser,
) -> anyhow::Result<User> {
    let new_user: User = sqlx::query_as(
        format!(
            r#"
    INSERT INTO {} (firstname, lastname, email, password)
    VALUES ($1, $2, $3, $4)
    RETURNING user_id, firstname, lastname, email, password"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&data.firstname)
    .bind(&data.lastname)
    .bind(&data.email)
    .bind(&data.password)
    .fetch_one(&mut **tx)
    .await?;
    Ok(new_user)
}

/// Write every column of `user` back, returns the number of affected rows.
pub async fn update_user(tx: &mut Transaction<'_, Postgres>, user: &User) -> anyhow::Result<u64> {
    let res = sqlx::query(
        format!(
            r#"
        UPDATE {}
        SET firstname = $1, lastname = $2, email = $3, password = $4
        WHERE user_id = $5"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&user.firstname)
    .bind(&user.lastname)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.user_id)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_user(tx: &mut Transaction<'_, Postgres>, id: i32) -> anyhow::Result<u64> {
    let stmt = format!("DELETE FROM {} WHERE user_id = $1", TABLE_NAME);
    let res = binds_query(&stmt, vec![SqlxBinds::Int(id)])
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
