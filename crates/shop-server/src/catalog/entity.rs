//! Resource implementations for [`Product`] and [`SalesOutlet`].
//!
//! Uniqueness of product names and outlet addresses is checked in the hooks so the
//! caller gets a readable message; the `UNIQUE` constraints stay as the final guard.

use crate::model::{
    OutletCreate, OutletId, OutletUpdate, Product, ProductCreate, ProductId, ProductUpdate,
    SalesOutlet,
};
use async_trait::async_trait;
use shop_gateway::{GatewayError, Resource};
use sqlx::SqliteConnection;

#[async_trait]
impl Resource for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const TABLE: &'static str = "product";
    const COLUMNS: &'static str = "id, name, description, price";
    const ORDER_BY: &'static str = "name";

    async fn insert(conn: &mut SqliteConnection, params: &ProductCreate) -> Result<ProductId, GatewayError> {
        let result = sqlx::query("INSERT INTO product (name, description, price) VALUES (?, ?, ?)")
            .bind(&params.name)
            .bind(&params.description)
            .bind(params.price)
            .execute(&mut *conn)
            .await?;
        let id = ProductId(result.last_insert_rowid());
        replace_images(conn, id, &params.images).await?;
        Ok(id)
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<(), GatewayError> {
        sqlx::query(
            "UPDATE product SET name = COALESCE(?, name), description = COALESCE(?, description), \
             price = COALESCE(?, price) WHERE id = ?",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(*id)
        .execute(&mut *conn)
        .await?;

        if let Some(images) = &update.images {
            replace_images(conn, *id, images).await?;
        }
        Ok(())
    }

    async fn on_create(conn: &mut SqliteConnection, params: &ProductCreate) -> Result<(), GatewayError> {
        validate_product(&params.name, params.price)?;
        if product_name_taken(conn, &params.name, None).await? {
            return Err(GatewayError::Conflict("product already exists".into()));
        }
        Ok(())
    }

    async fn on_update(&self, conn: &mut SqliteConnection, update: &ProductUpdate) -> Result<(), GatewayError> {
        let name = update.name.as_deref().unwrap_or(&self.name);
        validate_product(name, update.price.unwrap_or(self.price))?;
        if product_name_taken(conn, name, Some(self.id)).await? {
            return Err(GatewayError::Conflict("product already exists".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for SalesOutlet {
    type Id = OutletId;
    type Create = OutletCreate;
    type Update = OutletUpdate;

    const TABLE: &'static str = "sales_outlet";
    const COLUMNS: &'static str = "id, address";
    const ORDER_BY: &'static str = "address";

    async fn insert(conn: &mut SqliteConnection, params: &OutletCreate) -> Result<OutletId, GatewayError> {
        let result = sqlx::query("INSERT INTO sales_outlet (address) VALUES (?)")
            .bind(&params.address)
            .execute(&mut *conn)
            .await?;
        Ok(OutletId(result.last_insert_rowid()))
    }

    async fn apply_update(
        conn: &mut SqliteConnection,
        id: &OutletId,
        update: &OutletUpdate,
    ) -> Result<(), GatewayError> {
        sqlx::query("UPDATE sales_outlet SET address = ? WHERE id = ?")
            .bind(&update.address)
            .bind(*id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn on_create(conn: &mut SqliteConnection, params: &OutletCreate) -> Result<(), GatewayError> {
        validate_address(&params.address)?;
        if address_taken(conn, &params.address, None).await? {
            return Err(GatewayError::Conflict("sales outlet already exists".into()));
        }
        Ok(())
    }

    async fn on_update(&self, conn: &mut SqliteConnection, update: &OutletUpdate) -> Result<(), GatewayError> {
        validate_address(&update.address)?;
        if address_taken(conn, &update.address, Some(self.id)).await? {
            return Err(GatewayError::Conflict("sales outlet already exists".into()));
        }
        Ok(())
    }
}

/// Loads the image paths of a product in insertion order.
pub async fn product_images(conn: &mut SqliteConnection, id: ProductId) -> Result<Vec<String>, GatewayError> {
    let paths = sqlx::query_scalar("SELECT image_path FROM product_image WHERE product_id = ? ORDER BY id")
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(paths)
}

async fn replace_images(conn: &mut SqliteConnection, id: ProductId, images: &[String]) -> Result<(), GatewayError> {
    sqlx::query("DELETE FROM product_image WHERE product_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    for path in images {
        sqlx::query("INSERT INTO product_image (product_id, image_path) VALUES (?, ?)")
            .bind(id)
            .bind(path)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

fn validate_product(name: &str, price: i64) -> Result<(), GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::Rejected("product name is required".into()));
    }
    if price < 0 {
        return Err(GatewayError::Rejected("price must not be negative".into()));
    }
    Ok(())
}

fn validate_address(address: &str) -> Result<(), GatewayError> {
    if address.trim().is_empty() {
        return Err(GatewayError::Rejected("address is required".into()));
    }
    Ok(())
}

async fn product_name_taken(
    conn: &mut SqliteConnection,
    name: &str,
    except: Option<ProductId>,
) -> Result<bool, GatewayError> {
    let found: Option<ProductId> = sqlx::query_scalar("SELECT id FROM product WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some_and(|id| Some(id) != except))
}

async fn address_taken(
    conn: &mut SqliteConnection,
    address: &str,
    except: Option<OutletId>,
) -> Result<bool, GatewayError> {
    let found: Option<OutletId> = sqlx::query_scalar("SELECT id FROM sales_outlet WHERE address = ?")
        .bind(address)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some_and(|id| Some(id) != except))
}
