use fake::{faker::lorem::en::Word, Dummy, Fake, Faker};
use sqlx::{PgPool, Postgres, Transaction};

use crate::model::product_profile::ProductProfile;

pub struct ProductProfileFactory<T: Clone> {
    modifier_one: fn(x: &ProductProfile, ext: T) -> ProductProfile,
    modifier_many: fn(x: &ProductProfile, idx: usize, ext: T) -> ProductProfile,
}

impl<T: Clone> Default for ProductProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProductProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &ProductProfile, ext: T) -> ProductProfile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(
        &mut self,
        modifier: fn(x: &ProductProfile, idx: usize, ext: T) -> ProductProfile,
    ) {
        self.modifier_many = modifier
    }

    /// Insert a profile for an existing product.
    pub async fn generate_one(
        &mut self,
        db: &PgPool,
        product_id: i32,
        ext: T,
    ) -> anyhow::Result<ProductProfile> {
        let data = ProductProfileDummy::new().to_profile(product_id);
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        insert(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(data)
    }

    /// Insert one profile per product id.
    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        product_ids: &[i32],
        ext: T,
    ) -> anyhow::Result<Vec<ProductProfile>> {
        let mut result: Vec<ProductProfile> = vec![];
        let mut tx = db.begin().await?;
        for (idx, product_id) in product_ids.iter().enumerate() {
            let item = ProductProfileDummy::new().to_profile(*product_id);
            let item = (self.modifier_many)(&item, idx, ext.clone());
            insert(&mut tx, &item).await?;
            result.push(item);
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(tx: &mut Transaction<'_, Postgres>, data: &ProductProfile) -> anyhow::Result<()> {
    sqlx::query(
        r#"INSERT INTO public.product_profile (product_id, ratings, color, brand)
        VALUES ($1, $2, $3, $4)"#,
    )
    .bind(data.product_id)
    .bind(data.ratings)
    .bind(&data.color)
    .bind(&data.brand)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[derive(Debug, Dummy, Clone)]
struct ProductProfileDummy {
    #[dummy(faker = "0.0..5.0")]
    pub ratings: f64,
    #[dummy(faker = "Word()")]
    pub color: String,
    #[dummy(faker = "Word()")]
    pub brand: String,
}

impl ProductProfileDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn to_profile(&self, product_id: i32) -> ProductProfile {
        ProductProfile {
            product_id,
            ratings: self.ratings,
            color: self.color.clone(),
            brand: self.brand.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{
        factory::{product::ProductFactory, product_profile::ProductProfileFactory},
        model::product_profile::ProductProfile,
    };

    #[sqlx::test]
    async fn test_generate_one_modified(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let product = ProductFactory::new().generate_one(&pool, ()).await?;

        // When
        let mut factory = ProductProfileFactory::new();
        factory.modified_one(|data, _| ProductProfile {
            brand: "Acme".to_string(),
            ..data.clone()
        });
        factory.generate_one(&pool, product.product_id, ()).await?;

        // Expect
        let res: (i32, String) =
            sqlx::query_as(r#"SELECT product_id, brand FROM public.product_profile"#)
                .fetch_one(&pool)
                .await?;
        assert_eq!(res.0, product.product_id);
        assert_eq!(res.1, "Acme");
        Ok(())
    }
}
