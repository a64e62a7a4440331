use chrono::{Duration, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    DatabaseBackend, DbConn, IntoActiveModel, MockDatabase, MockExecResult, Transaction,
    TryIntoModel,
};
use uuid::Uuid;

use papyr_core::domain::{Blog, Event, Order, Post, Product, User};
use papyr_core::error::RepoError;
use papyr_core::ports::{
    BaseRepository, EventRepository, OrderRepository, SlugLookup, TokenRepository,
};

use super::entity::{blog, cart_product, comment, event, order, post, product, user};
use super::mapper::ModelMapper;
use super::postgres_repo::{
    PostgresBlogRepository, PostgresEventRepository, PostgresOrderRepository,
    PostgresPostRepository, PostgresProductRepository, PostgresTokenRepository,
    PostgresUserRepository,
};

fn at(minutes_ago: i64) -> DateTimeWithTimeZone {
    (Utc::now() - Duration::minutes(minutes_ago)).into()
}

fn post_row(id: Uuid, tags: &str) -> post::Model {
    post::Model {
        id,
        title: "A".to_owned(),
        slug: "a".to_owned(),
        content: "B".to_owned(),
        tags: tags.to_owned(),
        media: String::new(),
        is_published: true,
        created_at: at(60),
        updated_at: at(0),
    }
}

fn product_row(id: Uuid, title: &str) -> product::Model {
    product::Model {
        id,
        title: title.to_owned(),
        slug: title.to_lowercase(),
        content: String::new(),
        tags: "store".to_owned(),
        media: String::new(),
        price: 9.5,
        quantity: 3,
        is_published: true,
        created_at: at(600),
        updated_at: at(600),
    }
}

fn user_row(id: Uuid) -> user::Model {
    user::Model {
        id,
        email: "ada@example.com".to_owned(),
        password: "$argon2id$stored".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        is_admin: false,
        is_subscribed: true,
        is_banned: false,
        address1: None,
        address2: None,
        city: Some("London".to_owned()),
        state: None,
        zip: None,
        country: None,
        shipping_first_name: None,
        shipping_last_name: None,
        shipping_email: None,
        shipping_address1: None,
        shipping_address2: None,
        shipping_city: None,
        shipping_state: None,
        shipping_zip: None,
        shipping_country: None,
        created_at: at(1000),
        updated_at: at(0),
    }
}

fn cart_row(user_id: Uuid, product_id: Uuid, minutes_ago: i64) -> cart_product::Model {
    cart_product::Model {
        id: Uuid::new_v4(),
        user_id,
        product_id,
        created_at: at(minutes_ago),
    }
}

fn cart_of(ids: &[Uuid]) -> Vec<Product> {
    ids.iter()
        .map(|id| Product {
            id: Some(*id),
            ..Default::default()
        })
        .collect()
}

/// The domain view of a stored user, as `to_model` builds it with an empty cart.
fn domain_user(row: user::Model) -> User {
    User {
        id: Some(row.id),
        email: row.email,
        password: None,
        first_name: row.first_name,
        last_name: row.last_name,
        is_admin: row.is_admin,
        is_subscribed: row.is_subscribed,
        is_banned: row.is_banned,
        city: row.city,
        ..Default::default()
    }
}

/// The row `apply` writes when `model` is saved over `stored`.
fn rewrite<E>(stored: E::Model, model: &E::Domain) -> E::Model
where
    E: ModelMapper,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: TryIntoModel<E::Model>,
{
    let mut active = stored.into_active_model();
    E::apply(&mut active, model, Utc::now());
    active.try_into_model().unwrap()
}

fn statements(db: &DbConn) -> Vec<String> {
    db.clone()
        .into_transaction_log()
        .iter()
        .map(|txn: &Transaction| format!("{txn:?}"))
        .collect()
}

#[tokio::test]
async fn test_save_new_post_splits_tags_on_the_way_back() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(id, "x, y")]])
        .into_connection();
    let repo = PostgresPostRepository::new(db.clone());

    let payload: Post = serde_json::from_str(
        r#"{"title": "A", "content": "B", "tags": "x, y", "isPublished": true}"#,
    )
    .unwrap();
    let saved = repo.save(payload).await.unwrap();

    assert_eq!(saved.id, Some(id));
    assert_eq!(saved.tags, vec!["x", "y"]);

    let log = statements(&db);
    assert_eq!(log.len(), 1);
    assert!(log[0].contains(r#"INSERT INTO \"posts\""#));
    assert!(log[0].contains("x, y"));
}

#[tokio::test]
async fn test_save_existing_post_updates_in_place() {
    let id = Uuid::new_v4();
    let stored = post_row(id, "x,   y");
    let mut updated = stored.clone();
    updated.content = "updated".to_owned();
    updated.tags = "x, y".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![updated]])
        .into_connection();
    let repo = PostgresPostRepository::new(db.clone());

    let mut model = Post::from(stored.clone());
    model.content = "updated".to_owned();
    let saved = repo.save(model).await.unwrap();

    assert_eq!(saved.id, Some(id));
    assert_eq!(saved.content, "updated");
    assert_eq!(saved.created_at, Some(stored.created_at.into()));

    let log = statements(&db);
    assert_eq!(log.len(), 2);
    assert!(log[0].contains("SELECT"));
    assert!(log[1].contains(r#"UPDATE \"posts\""#));
}

#[tokio::test]
async fn test_round_trip_is_stable_except_tag_whitespace() {
    let id = Uuid::new_v4();
    let stored = post_row(id, " x ,y ");
    let mut rewritten = stored.clone();
    rewritten.tags = "x, y".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let first = Post::from(stored);
    let second = repo.save(first.clone()).await.unwrap();

    assert_eq!(
        Post {
            updated_at: None,
            ..second
        },
        Post {
            updated_at: None,
            ..first
        }
    );
}

#[tokio::test]
async fn test_unknown_id_creates_row_with_that_id() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new(), vec![post_row(id, "")]])
        .into_connection();
    let repo = PostgresPostRepository::new(db.clone());

    let mut model = Post::new("A", "B");
    model.id = Some(id);
    let saved = repo.save(model).await.unwrap();

    assert_eq!(saved.id, Some(id));
    assert!(saved.tags.is_empty());
    let log = statements(&db);
    assert!(log[1].contains(r#"INSERT INTO \"posts\""#));
    assert!(log[1].contains(&id.to_string()));
}

#[tokio::test]
async fn test_find_post_by_slug() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(id, "news")]])
        .into_connection();
    let repo = PostgresPostRepository::new(db.clone());

    let found = repo.find_by_slug("a").await.unwrap().unwrap();

    assert_eq!(found.id, Some(id));
    assert_eq!(found.tags, vec!["news"]);
    assert!(statements(&db)[0].contains(r#"\"slug\" = "#));
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_blog_loads_comments_newest_first() {
    let blog_id = Uuid::new_v4();
    let blog_row = blog::Model {
        id: blog_id,
        title: "Launch".to_owned(),
        slug: "launch".to_owned(),
        content: String::new(),
        tags: "news".to_owned(),
        media: String::new(),
        is_published: true,
        published_at: Some(at(30)),
        created_at: at(60),
        updated_at: at(60),
    };
    let comment_row = |minutes_ago: i64, content: &str| comment::Model {
        id: Uuid::new_v4(),
        blog_id,
        author_id: None,
        content: content.to_owned(),
        created_at: at(minutes_ago),
        updated_at: at(minutes_ago),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![blog_row]])
        .append_query_results(vec![vec![
            comment_row(1, "newest"),
            comment_row(20, "oldest"),
        ]])
        .into_connection();
    let repo = PostgresBlogRepository::new(db.clone());

    let blog: Blog = repo.find_by_id(blog_id).await.unwrap().unwrap();

    let contents: Vec<&str> = blog.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["newest", "oldest"]);
    assert!(blog.comments.iter().all(|c| c.blog_id == blog_id));

    let log = statements(&db);
    assert_eq!(log.len(), 2);
    assert!(log[1].contains(r#"ORDER BY \"comments\".\"created_at\" DESC"#));
}

#[tokio::test]
async fn test_user_cart_gains_exactly_one_row() {
    let user_id = Uuid::new_v4();
    let (p1, p2, p3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let cp1 = cart_row(user_id, p1, 20);
    let cp2 = cart_row(user_id, p2, 10);
    let cp3 = cart_row(user_id, p3, 0);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // find, update
        .append_query_results(vec![vec![user_row(user_id)], vec![user_row(user_id)]])
        // stored cart, inserted row, reloaded cart
        .append_query_results(vec![
            vec![cp2.clone(), cp1.clone()],
            vec![cp3.clone()],
            vec![cp3, cp2, cp1],
        ])
        .append_query_results(vec![vec![
            product_row(p1, "One"),
            product_row(p2, "Two"),
            product_row(p3, "Three"),
        ]])
        .into_connection();
    let repo = PostgresUserRepository::new(db.clone());

    let mut model = domain_user(user_row(user_id));
    model.cart = cart_of(&[p1, p2, p3]);
    let saved = repo.save(model).await.unwrap();

    let titles: Vec<&str> = saved.cart.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Three", "Two", "One"]);

    let log = statements(&db);
    assert_eq!(log.len(), 6);
    let inserts = log
        .iter()
        .filter(|sql| sql.contains(r#"INSERT INTO \"cart_products\""#))
        .count();
    assert_eq!(inserts, 1);
    assert!(log[3].contains(&p3.to_string()));
    assert!(!log.iter().any(|sql| sql.contains("DELETE")));
}

#[tokio::test]
async fn test_user_cart_loses_exactly_one_row() {
    let user_id = Uuid::new_v4();
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    let keep = cart_row(user_id, p1, 20);
    let drop = cart_row(user_id, p2, 10);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(user_id)], vec![user_row(user_id)]])
        .append_query_results(vec![vec![drop.clone(), keep.clone()], vec![keep.clone()]])
        .append_query_results(vec![vec![product_row(p1, "One")]])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let repo = PostgresUserRepository::new(db.clone());

    let mut model = domain_user(user_row(user_id));
    model.cart = cart_of(&[p1]);
    let saved = repo.save(model).await.unwrap();

    assert_eq!(saved.cart.len(), 1);
    assert_eq!(saved.cart[0].id, Some(p1));

    let log = statements(&db);
    let deletes: Vec<&String> = log.iter().filter(|sql| sql.contains("DELETE")).collect();
    assert_eq!(deletes.len(), 1);
    assert!(deletes[0].contains(&drop.id.to_string()));
    assert!(!deletes[0].contains(&keep.id.to_string()));
    assert!(!log.iter().any(|sql| sql.contains("INSERT")));
}

#[tokio::test]
async fn test_unchanged_cart_writes_nothing() {
    let user_id = Uuid::new_v4();
    let p1 = Uuid::new_v4();
    let cp1 = cart_row(user_id, p1, 5);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(user_id)], vec![user_row(user_id)]])
        .append_query_results(vec![vec![cp1.clone()], vec![cp1]])
        .append_query_results(vec![vec![product_row(p1, "One")]])
        .into_connection();
    let repo = PostgresUserRepository::new(db.clone());

    let mut model = domain_user(user_row(user_id));
    model.cart = cart_of(&[p1]);
    repo.save(model).await.unwrap();

    let log = statements(&db);
    assert_eq!(log.len(), 5);
    assert!(!log.iter().any(|sql| sql.contains("cart_products") && sql.contains("INSERT")));
}

#[tokio::test]
async fn test_missing_password_keeps_stored_one() {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(user_id)], vec![user_row(user_id)]])
        .append_query_results(vec![Vec::<cart_product::Model>::new(), Vec::new()])
        .into_connection();
    let repo = PostgresUserRepository::new(db.clone());

    let mut model = domain_user(user_row(user_id));
    model.first_name = "Augusta".to_owned();
    let saved = repo.save(model).await.unwrap();

    assert_eq!(saved.password, None);
    let log = statements(&db);
    assert!(log[1].contains("Augusta"));
    assert!(!log[1].contains(r#"\"password\" = "#));
}

#[tokio::test]
async fn test_cart_skips_products_that_no_longer_exist() {
    let user_id = Uuid::new_v4();
    let (p1, gone) = (Uuid::new_v4(), Uuid::new_v4());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(user_id)]])
        .append_query_results(vec![vec![
            cart_row(user_id, gone, 1),
            cart_row(user_id, p1, 2),
        ]])
        .append_query_results(vec![vec![product_row(p1, "One")]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let found: User = repo.find_by_id(user_id).await.unwrap().unwrap();

    assert_eq!(found.cart.len(), 1);
    assert_eq!(found.cart[0].id, Some(p1));
    assert_eq!(found.city.as_deref(), Some("London"));
}

#[tokio::test]
async fn test_published_events_filter_by_date_in_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<super::entity::event::Model>::new()])
        .into_connection();
    let repo = PostgresEventRepository::new(db.clone());

    let events = repo
        .find_published_since(Utc::now() - Duration::days(2))
        .await
        .unwrap();

    assert!(events.is_empty());
    let log = statements(&db);
    assert!(log[0].contains(r#"\"date\" >= "#));
    assert!(log[0].contains(r#"ORDER BY \"events\".\"date\" DESC"#));
}

#[tokio::test]
async fn test_order_with_unknown_status_fails_to_decode() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![order::Model {
            id,
            user_id: None,
            status: "lost".to_owned(),
            total: 0.0,
            products: serde_json::json!([]),
            created_at: at(1),
            updated_at: at(1),
        }]])
        .into_connection();
    let repo = PostgresOrderRepository::new(db);

    let result = repo.find_by_user(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::Decode(_))));
}

#[tokio::test]
async fn test_order_snapshot_is_decoded() {
    let id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![order::Model {
            id,
            user_id: Some(user_id),
            status: "paid".to_owned(),
            total: 19.0,
            products: serde_json::json!([{"title": "Mug", "price": 9.5, "tags": ["store"]}]),
            created_at: at(1),
            updated_at: at(1),
        }]])
        .into_connection();
    let repo = PostgresOrderRepository::new(db);

    let orders = repo.find_by_user(user_id).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].products[0].title, "Mug");
    assert_eq!(orders[0].status.as_str(), "paid");
}

#[tokio::test]
async fn test_delete_expired_tokens_reports_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();
    let repo = PostgresTokenRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await.unwrap(), 3);
}

#[tokio::test]
async fn test_blog_round_trip_keeps_published_at_and_reloads_comments() {
    let blog_id = Uuid::new_v4();
    let stored = blog::Model {
        id: blog_id,
        title: "Launch".to_owned(),
        slug: "launch".to_owned(),
        content: "Body".to_owned(),
        tags: "news, launch".to_owned(),
        media: String::new(),
        is_published: true,
        published_at: Some(at(30)),
        created_at: at(60),
        updated_at: at(60),
    };
    let comments = vec![
        comment::Model {
            id: Uuid::new_v4(),
            blog_id,
            author_id: None,
            content: "first!".to_owned(),
            created_at: at(5),
            updated_at: at(5),
        },
    ];

    let reader = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]])
        .append_query_results(vec![comments.clone()])
        .into_connection();
    let first: Blog = PostgresBlogRepository::new(reader)
        .find_by_id(blog_id)
        .await
        .unwrap()
        .unwrap();

    let rewritten = rewrite::<blog::Entity>(stored.clone(), &first);
    assert_eq!(rewritten.published_at, stored.published_at);
    assert_eq!(
        blog::Model {
            updated_at: stored.updated_at,
            ..rewritten.clone()
        },
        stored
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
        .append_query_results(vec![comments])
        .into_connection();
    let second = PostgresBlogRepository::new(db.clone())
        .save(first.clone())
        .await
        .unwrap();

    assert_eq!(second.comments.len(), 1);
    assert_eq!(
        Blog {
            updated_at: None,
            ..second
        },
        Blog {
            updated_at: None,
            ..first
        }
    );
    let log = statements(&db);
    assert_eq!(log.len(), 3);
    assert!(log[2].contains(r#"FROM \"comments\""#));
}

#[tokio::test]
async fn test_event_round_trip_with_and_without_location() {
    let row = |latitude: Option<f64>, longitude: Option<f64>| event::Model {
        id: Uuid::new_v4(),
        title: "Meetup".to_owned(),
        slug: "meetup".to_owned(),
        content: String::new(),
        tags: "community".to_owned(),
        media: String::new(),
        is_published: true,
        date: at(-1440),
        latitude,
        longitude,
        address: "1 Main St".to_owned(),
        created_at: at(60),
        updated_at: at(60),
    };

    for stored in [row(None, None), row(Some(51.5072), Some(-0.1276))] {
        let first = Event::from(stored.clone());
        let rewritten = rewrite::<event::Entity>(stored.clone(), &first);
        assert_eq!(
            event::Model {
                updated_at: stored.updated_at,
                ..rewritten.clone()
            },
            stored
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
            .into_connection();
        let second = PostgresEventRepository::new(db)
            .save(first.clone())
            .await
            .unwrap();

        assert_eq!(second.latitude, stored.latitude);
        assert_eq!(second.longitude, stored.longitude);
        assert_eq!(
            Event {
                updated_at: None,
                ..second
            },
            Event {
                updated_at: None,
                ..first
            }
        );
    }
}

#[tokio::test]
async fn test_product_round_trip_keeps_price_and_quantity() {
    let stored = product_row(Uuid::new_v4(), "Mug");
    let first = Product::from(stored.clone());
    let rewritten = rewrite::<product::Entity>(stored.clone(), &first);
    assert_eq!(
        product::Model {
            updated_at: stored.updated_at,
            ..rewritten.clone()
        },
        stored
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
        .into_connection();
    let second = PostgresProductRepository::new(db)
        .save(first.clone())
        .await
        .unwrap();

    assert_eq!(second.price, 9.5);
    assert_eq!(second.quantity, 3);
    assert_eq!(
        Product {
            updated_at: None,
            ..second
        },
        Product {
            updated_at: None,
            ..first
        }
    );
}

#[tokio::test]
async fn test_user_round_trip_keeps_password_and_cart() {
    let user_id = Uuid::new_v4();
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    let stored = user_row(user_id);
    let cart_rows = vec![cart_row(user_id, p2, 1), cart_row(user_id, p1, 10)];
    let products = vec![product_row(p1, "One"), product_row(p2, "Two")];

    let reader = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]])
        .append_query_results(vec![cart_rows.clone()])
        .append_query_results(vec![products.clone()])
        .into_connection();
    let first: User = PostgresUserRepository::new(reader)
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.password, None);

    let rewritten = rewrite::<user::Entity>(stored.clone(), &first);
    assert_eq!(rewritten.password, "$argon2id$stored");
    assert_eq!(
        user::Model {
            updated_at: stored.updated_at,
            ..rewritten.clone()
        },
        stored
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
        // stored cart, reloaded cart
        .append_query_results(vec![cart_rows.clone(), cart_rows])
        .append_query_results(vec![products])
        .into_connection();
    let second = PostgresUserRepository::new(db.clone())
        .save(first.clone())
        .await
        .unwrap();

    let titles: Vec<&str> = second.cart.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Two", "One"]);
    assert_eq!(
        User {
            updated_at: None,
            ..second
        },
        User {
            updated_at: None,
            ..first
        }
    );

    let log = statements(&db);
    assert_eq!(log.len(), 5);
    assert!(!log[1].contains(r#"\"password\" = "#));
    assert!(
        !log.iter()
            .any(|sql| sql.contains("INSERT") || sql.contains("DELETE"))
    );
}

#[tokio::test]
async fn test_order_round_trip_keeps_snapshot_and_total() {
    let mug = Product {
        id: Some(Uuid::new_v4()),
        title: "Mug".to_owned(),
        slug: "mug".to_owned(),
        tags: vec!["store".to_owned()],
        price: 9.5,
        quantity: 2,
        is_published: true,
        ..Default::default()
    };
    let stored = order::Model {
        id: Uuid::new_v4(),
        user_id: Some(Uuid::new_v4()),
        status: "paid".to_owned(),
        // Differs from the snapshot's sum; the stored total wins.
        total: 17.5,
        products: serde_json::to_value(vec![mug]).unwrap(),
        created_at: at(10),
        updated_at: at(10),
    };

    let first = Order::try_from(stored.clone()).unwrap();
    let rewritten = rewrite::<order::Entity>(stored.clone(), &first);
    assert_eq!(rewritten.total, 17.5);
    assert_eq!(rewritten.products, stored.products);
    assert_eq!(
        order::Model {
            updated_at: stored.updated_at,
            ..rewritten.clone()
        },
        stored
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()], vec![rewritten]])
        .into_connection();
    let second = PostgresOrderRepository::new(db)
        .save(first.clone())
        .await
        .unwrap();

    assert_eq!(second.total, 17.5);
    assert_eq!(second.products, first.products);
    assert_eq!(
        Order {
            updated_at: None,
            ..second
        },
        Order {
            updated_at: None,
            ..first
        }
    );
}
