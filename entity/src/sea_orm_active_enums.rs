use sea_orm::entity::prelude::*;

/// Beer style persisted as its SMALLINT ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum BeerStyle {
    #[sea_orm(num_value = 0)]
    Lager,
    #[sea_orm(num_value = 1)]
    Pilsner,
    #[sea_orm(num_value = 2)]
    Stout,
    #[sea_orm(num_value = 3)]
    Gose,
    #[sea_orm(num_value = 4)]
    Porter,
    #[sea_orm(num_value = 5)]
    Ale,
    #[sea_orm(num_value = 6)]
    Wheat,
    #[sea_orm(num_value = 7)]
    Ipa,
    #[sea_orm(num_value = 8)]
    PaleAle,
    #[sea_orm(num_value = 9)]
    Saison,
}
