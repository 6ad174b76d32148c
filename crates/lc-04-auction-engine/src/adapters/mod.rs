pub mod cadastre_gateway;
pub mod market_gateway;

pub use cadastre_gateway::CadastreGateway;
pub use market_gateway::MarketGateway;
