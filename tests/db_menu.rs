mod common;

use campus_food::db::{DbConnection, MenuOperations};
use campus_food::test_utils::seed_menu_item;

#[test]
fn get_all_menu_items_orders_by_category_then_name() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let menu_ops = MenuOperations::new(pool);

    let items = menu_ops.get_all_menu_items().expect("load menu");
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Cold Brew", "Veggie Burrito", "Caesar Salad"]);
    assert_eq!(items.len(), fixtures.menu_item_ids.len());
}

#[test]
fn same_category_sorted_by_name() {
    let (pool, _guard) = common::setup_pool();
    {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        seed_menu_item(conn.connection(), "Wrap", 6.0, "Mains").expect("seed wrap");
        seed_menu_item(conn.connection(), "Bowl", 6.5, "Mains").expect("seed bowl");
    }
    let menu_ops = MenuOperations::new(pool);

    let items = menu_ops.get_all_menu_items().expect("load menu");
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Bowl", "Wrap"]);
    assert_eq!(items[0].price, 6.5);
}

#[test]
fn empty_catalog_loads_empty_list() {
    let (pool, _guard) = common::setup_pool();
    let menu_ops = MenuOperations::new(pool);

    assert!(menu_ops.get_all_menu_items().expect("load menu").is_empty());
}
