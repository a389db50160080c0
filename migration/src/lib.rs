//! 数据库迁移
//!
//! 服务启动时由存储层调用 `Migrator::up` 执行。

pub use sea_orm_migration::prelude::*;

mod m20220817_000001_create_auction_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20220817_000001_create_auction_tables::Migration)]
    }
}
