use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractName {
    FactoryRouter,
    ERC721Factory,
    ERC721Template,
    ERC20Template,
    Ocean,
    FixedPrice,
    Dispenser,
}

impl ContractName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::FactoryRouter => "FactoryRouter",
            ContractName::ERC721Factory => "ERC721Factory",
            ContractName::ERC721Template => "ERC721Template",
            ContractName::ERC20Template => "ERC20Template",
            ContractName::Ocean => "Ocean",
            ContractName::FixedPrice => "FixedPrice",
            ContractName::Dispenser => "Dispenser",
        }
    }

    /// Key of this contract in the deployed `address.json`.
    pub fn address_key(&self) -> &'static str {
        match self {
            ContractName::FactoryRouter => "Router",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for ContractName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FactoryRouter" | "Router" => Ok(ContractName::FactoryRouter),
            "ERC721Factory" => Ok(ContractName::ERC721Factory),
            "ERC721Template" => Ok(ContractName::ERC721Template),
            "ERC20Template" => Ok(ContractName::ERC20Template),
            "Ocean" => Ok(ContractName::Ocean),
            "FixedPrice" => Ok(ContractName::FixedPrice),
            "Dispenser" => Ok(ContractName::Dispenser),
            _ => Err(format!("'{}' is not a valid contract name", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_uses_short_address_key() {
        assert_eq!(ContractName::FactoryRouter.address_key(), "Router");
        assert_eq!(ContractName::Ocean.address_key(), "Ocean");
        assert_eq!("Router".parse(), Ok(ContractName::FactoryRouter));
        assert_eq!("FactoryRouter".parse(), Ok(ContractName::FactoryRouter));
        assert!("Hub".parse::<ContractName>().is_err());
    }
}
