mod common;

use common::{add_product, add_stock, fixture, order, stock, system};
use shop_gateway::ResourceClient;
use shop_server::catalog::CatalogError;
use shop_server::inventory::InventoryError;
use shop_server::model::{
    OutletCreate, OutletId, OutletUpdate, ProductId, ProductUpdate, StockItem, StockKey,
};

#[tokio::test]
async fn test_product_names_are_unique() {
    let system = system().await;
    let boot = add_product(&system, "Boot", 100).await;
    let sock = add_product(&system, "Sock", 5).await;

    let err = system
        .product_client
        .create_product(shop_server::model::ProductCreate {
            name: "Boot".into(),
            description: String::new(),
            price: 1,
            images: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(_)), "got {err:?}");

    let rename = ProductUpdate {
        name: Some("Boot".into()),
        ..ProductUpdate::default()
    };
    let err = system.product_client.update_product(sock, rename).await.unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(_)));

    // Keeping one's own name is not a conflict.
    let reprice = ProductUpdate {
        name: Some("Boot".into()),
        price: Some(120),
        ..ProductUpdate::default()
    };
    let updated = system.product_client.update_product(boot, reprice).await.unwrap();
    assert_eq!(updated.price, 120);
}

#[tokio::test]
async fn test_products_carry_their_images() {
    let system = system().await;
    let boot = add_product(&system, "Boot", 100).await;
    add_product(&system, "Anorak", 300).await;

    let products = system.product_client.products().await.unwrap();
    assert_eq!(
        products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Anorak", "Boot"]
    );
    assert_eq!(products[1].images, vec!["/img/Boot-front.png", "/img/Boot-back.png"]);

    let update = ProductUpdate {
        images: Some(vec!["/img/new.png".into()]),
        ..ProductUpdate::default()
    };
    system.product_client.update_product(boot, update).await.unwrap();
    let product = system.product_client.product(boot).await.unwrap();
    assert_eq!(product.images, vec!["/img/new.png"]);
    assert_eq!(product.description, "Boot description");

    let err = system.product_client.product(ProductId(99)).await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound("Product not found: product_99".into()));
}

#[tokio::test]
async fn test_outlet_addresses_are_unique() {
    let system = system().await;
    let first = system
        .outlet_client
        .create_outlet(OutletCreate {
            address: "Main St 1".into(),
        })
        .await
        .unwrap();
    let second = system
        .outlet_client
        .create_outlet(OutletCreate {
            address: "Harbour 2".into(),
        })
        .await
        .unwrap();

    let err = system
        .outlet_client
        .create_outlet(OutletCreate {
            address: "Main St 1".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(_)));

    let err = system
        .outlet_client
        .update_outlet(second, OutletUpdate { address: "Main St 1".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(_)));

    let outlets = system.outlet_client.list().await.unwrap();
    assert_eq!(outlets[0].address, "Harbour 2");
    assert!(system.outlet_client.outlet_exists(first).await.unwrap());

    system.outlet_client.delete(first).await.unwrap();
    assert!(!system.outlet_client.outlet_exists(first).await.unwrap());
    assert!(system.outlet_client.delete(first).await.is_err());
}

#[tokio::test]
async fn test_lookups_answer_absence_without_error() {
    let f = fixture().await;

    assert!(!f.system.outlet_client.outlet_exists(OutletId(99)).await.unwrap());
    assert!(f
        .system
        .outlet_client
        .product_stock(f.outlet, ProductId(99))
        .await
        .unwrap()
        .is_empty());

    add_stock(&f.system, f.outlet, f.boots, 44, 0).await;
    let sizes = f.system.outlet_client.product_stock(f.outlet, f.boots).await.unwrap();
    assert_eq!(sizes.iter().map(|s| (s.size, s.amount)).collect::<Vec<_>>(), vec![(42, 5), (44, 0)]);

    let listing = f.system.outlet_client.outlet_stock(f.outlet).await.unwrap();
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[0].product_name, "Boot");
    assert_eq!(listing[0].price, 100);

    let err = f.system.outlet_client.outlet_stock(OutletId(99)).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_stock_item_lifecycle() {
    let f = fixture().await;
    let key = StockKey::new(f.outlet, f.boots, 42);

    let duplicate = StockItem {
        sales_outlet_id: f.outlet,
        product_id: f.boots,
        size: 42,
        amount: 9,
    };
    let err = f.system.inventory_client.add_stock_item(duplicate).await.unwrap_err();
    assert!(matches!(err, InventoryError::AlreadyExists(_)));

    let orphan = StockItem {
        sales_outlet_id: OutletId(99),
        product_id: f.boots,
        size: 42,
        amount: 1,
    };
    let err = f.system.inventory_client.add_stock_item(orphan).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound(_)));

    f.system.inventory_client.update_stock_amount(key, 8).await.unwrap();
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(8));
    assert!(matches!(
        f.system.inventory_client.update_stock_amount(key, -1).await,
        Err(InventoryError::ValidationError(_))
    ));
    assert!(matches!(
        f.system
            .inventory_client
            .update_stock_amount(StockKey { size: 1, ..key }, 3)
            .await,
        Err(InventoryError::NotFound(_))
    ));

    f.system.inventory_client.decrement_stock(key, 8).await.unwrap();
    assert!(matches!(
        f.system.inventory_client.decrement_stock(key, 1).await,
        Err(InventoryError::InsufficientStock(_))
    ));
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(0));

    f.system.inventory_client.increment_stock(key, 2).await.unwrap();
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, Some(2));

    f.system.inventory_client.delete_stock_item(f.outlet, f.boots).await.unwrap();
    assert_eq!(stock(&f.system, f.outlet, f.boots, 42).await, None);
    assert!(matches!(
        f.system.inventory_client.delete_stock_item(f.outlet, f.boots).await,
        Err(InventoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_ordered_product_cannot_be_deleted() {
    let f = fixture().await;
    f.system
        .order_client
        .create_order(f.user, order(f.outlet, &[(f.boots, 42, 1)]))
        .await
        .unwrap();

    let err = f.system.product_client.delete(f.boots).await.unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(_)), "got {err:?}");
    assert!(f.system.product_client.get(f.boots).await.unwrap().is_some());

    // Unordered products go, and their stock rows with them.
    f.system.product_client.delete(f.socks).await.unwrap();
    assert_eq!(stock(&f.system, f.outlet, f.socks, 40).await, None);
}
