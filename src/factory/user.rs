use fake::{
    faker::{
        internet::en::{Password, SafeEmail},
        name::en::{FirstName, LastName},
    },
    Dummy, Fake, Faker,
};
use sqlx::{PgPool, Postgres, Transaction};

use crate::model::user::User;

pub struct UserFactory<T: Clone> {
    modifier_one: fn(x: &User, ext: T) -> User,
    modifier_many: fn(x: &User, idx: usize, ext: T) -> User,
}

impl<T: Clone> Default for UserFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> UserFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &User, ext: T) -> User) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &User, idx: usize, ext: T) -> User) {
        self.modifier_many = modifier
    }

    /// Insert one user. The returned row carries the id the database assigned.
    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<User> {
        let data = UserDummy::new().generate_one();
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        let user = insert(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(user)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<User>> {
        let data = UserDummy::new().generate_many(num);
        let mut result: Vec<User> = vec![];
        let mut tx = db.begin().await?;
        for (idx, item) in data.iter().enumerate() {
            let item = (self.modifier_many)(item, idx, ext.clone());
            result.push(insert(&mut tx, &item).await?);
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(tx: &mut Transaction<'_, Postgres>, data: &User) -> anyhow::Result<User> {
    let user: User = sqlx::query_as(
        r#"INSERT INTO public.user (firstname, lastname, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING user_id, firstname, lastname, email, password"#,
    )
    .bind(&data.firstname)
    .bind(&data.lastname)
    .bind(&data.email)
    .bind(&data.password)
    .fetch_one(&mut **tx)
    .await?;
    Ok(user)
}

#[derive(Debug, Dummy, Clone)]
struct UserDummy {
    #[dummy(faker = "FirstName()")]
    pub firstname: String,
    #[dummy(faker = "LastName()")]
    pub lastname: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "Password(8..16)")]
    pub password: String,
}

impl UserDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn to_user(&self) -> User {
        User {
            user_id: 0,
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn generate_one(&self) -> User {
        self.to_user()
    }

    pub fn generate_many(&self, num: u32) -> Vec<User> {
        (0..num).map(|_| Self::new().to_user()).collect()
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::user::UserFactory, model::user::User};

    #[sqlx::test]
    async fn test_generate_one(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = UserFactory::new();
        let user = factory.generate_one(&pool, ()).await?;

        // Expect
        let res: (i32, String) =
            sqlx::query_as(r#"SELECT user_id, email FROM public.user"#)
                .fetch_one(&pool)
                .await?;
        assert_eq!(res.0, user.user_id);
        assert_eq!(res.1, user.email);
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_many_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = UserFactory::<String>::new();
        factory.modified_many(|data, idx, ext| User {
            firstname: format!("{}{}", ext, idx),
            ..data.clone()
        });
        factory.generate_many(&pool, 5, "Al".to_string()).await?;

        // Expect
        let res: Vec<(String,)> =
            sqlx::query_as(r#"SELECT firstname FROM public.user ORDER BY user_id"#)
                .fetch_all(&pool)
                .await?;
        assert_eq!(res.len(), 5);
        assert_eq!(res[0].0, "Al0");
        assert_eq!(res[4].0, "Al4");
        Ok(())
    }
}
