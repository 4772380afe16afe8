use fake::{faker::lorem::en::Word, Dummy, Fake, Faker};
use sqlx::{PgPool, Postgres, Transaction};

use crate::model::product::Product;

pub struct ProductFactory<T: Clone> {
    modifier_one: fn(x: &Product, ext: T) -> Product,
    modifier_many: fn(x: &Product, idx: usize, ext: T) -> Product,
}

impl<T: Clone> Default for ProductFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProductFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Product, ext: T) -> Product) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Product, idx: usize, ext: T) -> Product) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Product> {
        let data = ProductDummy::new().to_product();
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        let product = insert(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(product)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Product>> {
        let mut result: Vec<Product> = vec![];
        let mut tx = db.begin().await?;
        for idx in 0..num as usize {
            let item = ProductDummy::new().to_product();
            let item = (self.modifier_many)(&item, idx, ext.clone());
            result.push(insert(&mut tx, &item).await?);
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert(tx: &mut Transaction<'_, Postgres>, data: &Product) -> anyhow::Result<Product> {
    let product: Product = sqlx::query_as(
        r#"INSERT INTO public.product (product_name, category, price)
        VALUES ($1, $2, $3)
        RETURNING product_id, product_name, category, price"#,
    )
    .bind(&data.product_name)
    .bind(&data.category)
    .bind(data.price)
    .fetch_one(&mut **tx)
    .await?;
    Ok(product)
}

#[derive(Debug, Dummy, Clone)]
struct ProductDummy {
    #[dummy(faker = "Word()")]
    pub product_name: String,
    #[dummy(faker = "Word()")]
    pub category: String,
    #[dummy(faker = "1.0..1000.0")]
    pub price: f64,
}

impl ProductDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn to_product(&self) -> Product {
        Product {
            product_id: 0,
            product_name: self.product_name.clone(),
            category: self.category.clone(),
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use crate::{factory::product::ProductFactory, model::product::Product};

    #[sqlx::test]
    async fn test_generate_many(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProductFactory::new();
        let products = factory.generate_many(&pool, 10, ()).await?;

        // Expect
        let num_data: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM public.product"#)
            .fetch_one(&pool)
            .await?;
        assert_eq!(num_data.0, 10);
        assert!(products.iter().all(|item| item.product_id > 0));
        Ok(())
    }

    #[sqlx::test]
    async fn test_generate_one_modified(pool: PgPool) -> anyhow::Result<()> {
        // When
        let mut factory = ProductFactory::<f64>::new();
        factory.modified_one(|data, ext| Product {
            product_name: "pho".to_string(),
            price: ext,
            ..data.clone()
        });
        factory.generate_one(&pool, 12.5).await?;

        // Expect
        let res: (String, f64) =
            sqlx::query_as(r#"SELECT product_name, price FROM public.product"#)
                .fetch_one(&pool)
                .await?;
        assert_eq!(res.0, "pho");
        assert_eq!(res.1, 12.5);
        Ok(())
    }
}
