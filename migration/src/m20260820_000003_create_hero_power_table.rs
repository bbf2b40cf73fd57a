use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260820_000001_create_hero_table::Hero, m20260820_000002_create_power_table::Power,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroPower::Id))
                    .col(string(HeroPower::Strength))
                    .col(integer(HeroPower::HeroId))
                    .col(integer(HeroPower::PowerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_hero_id_heroes")
                            .from(HeroPower::Table, HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_power_id_powers")
                            .from(HeroPower::Table, HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroPower::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroPower {
    #[sea_orm(iden = "hero_powers")]
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}
