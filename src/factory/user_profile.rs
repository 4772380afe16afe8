use fake::{faker::address::en::StreetName, Dummy, Fake, Faker};
use sqlx::{PgPool, Postgres, Transaction};

use crate::model::user_profile::UserProfile;

pub struct UserProfileFactory<T: Clone> {
    modifier_one: fn(x: &UserProfile, ext: T) -> UserProfile,
    modifier_many: fn(x: &UserProfile, idx: usize, ext: T) -> UserProfile,
}

impl<T: Clone> Default for UserProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> UserProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &UserProfile, ext: T) -> UserProfile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(
        &mut self,
        modifier: fn(x: &UserProfile, idx: usize, ext: T) -> UserProfile,
    ) {
        self.modifier_many = modifier
    }

    /// Insert a profile for an existing user.
    pub async fn generate_one(
        &mut self,
        db: &PgPool,
        user_id: i32,
        ext: T,
    ) -> anyhow::Result<UserProfile> {
        let data = UserProfileDummy::new().to_profile(user_id);
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        insert(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(data)
    }

    /// Insert one profile per user id.
    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        user_ids: &[i32],
        ext: T,
    ) -> anyhow::Result<Vec<UserProfile>> {
        let mut result: Vec<UserProfile> = vec![];
        let mut tx = db.begin().await?;
        for (idx, user_id) in user_ids.iter().enumerate() {
            let item = UserProfileDummy::new().to_profile(*user_id);
            let item = (self.modifier_many)(&item, idx, ext.clone());
            insert(&mut tx, &item).await?;
            result.push(item);
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(tx: &mut Transaction<'_, Postgres>, data: &UserProfile) -> anyhow::Result<()> {
    sqlx::query(
        r#"INSERT INTO public.user_profile (user_id, age, address, contact_number, pnn_number)
        VALUES ($1, $2, $3, $4, $5)"#,
    )
    .bind(data.user_id)
    .bind(data.age)
    .bind(&data.address)
    .bind(&data.contact_number)
    .bind(&data.pnn_number)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[derive(Debug, Dummy, Clone)]
struct UserProfileDummy {
    #[dummy(faker = "18..90")]
    pub age: i32,
    #[dummy(faker = "StreetName()")]
    pub address: String,
    #[dummy(faker = "10000000..99999999")]
    pub contact_suffix: u32,
    #[dummy(faker = "100000..999999")]
    pub pnn_number: u32,
}

impl UserProfileDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn to_profile(&self, user_id: i32) -> UserProfile {
        UserProfile {
            user_id,
            age: self.age,
            address: self.address.clone(),
            contact_number: format!("08{}", self.contact_suffix),
            pnn_number: self.pnn_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{
        core::validation::validate_user_profile,
        factory::{user::UserFactory, user_profile::UserProfileFactory},
    };

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let users = UserFactory::new().generate_many(&pool, 3, ()).await?;
        let user_ids: Vec<i32> = users.iter().map(|item| item.user_id).collect();

        // When
        let mut factory = UserProfileFactory::new();
        let profiles = factory.generate_many(&pool, &user_ids, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.user_profile"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 3);
        for item in profiles {
            assert!(validate_user_profile(&serde_json::to_value(&item)?).is_ok());
        }
        Ok(())
    }
}
