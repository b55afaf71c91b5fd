pub mod champion;
pub mod summoner;
