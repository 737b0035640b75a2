mod erc20_template;
mod erc721_factory;
mod erc721_template;
mod factory_router;

pub use erc20_template::ERC20Template;
pub use erc721_factory::ERC721Factory;
pub use erc721_template::ERC721Template;
pub use factory_router::FactoryRouter;
