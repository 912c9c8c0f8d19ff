use launchpad_contracts::launchpad::launch_factory::{LaunchFactory, LaunchFactoryInitArgs};
use launchpad_contracts::launchpad::stable_token::StableToken;
use launchpad_contracts::launchpad::token::{Token, TokenInitArgs};
use odra::casper_types::U256;
use odra::host::NoArgs;
use odra::host::{Deployer, HostEnv};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the launchpad suite: stable token, token template, factory
pub struct DeployLaunchpadScript;

impl DeployScript for DeployLaunchpadScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let caller = env.caller();

        println!("==> Deploying StableToken");
        let stable_token = StableToken::load_or_deploy(
            &env,
            NoArgs,
            container,
            600_000_000_000,
        )?;
        println!("StableToken deployed at: {:?}", stable_token.address());

        println!("==> Deploying Token template");
        let template = Token::load_or_deploy(
            &env,
            TokenInitArgs {
                name: String::from("Launch Token Template"),
                symbol: String::from("LTT"),
                router: caller,
                minter: caller,
            },
            container,
            600_000_000_000,
        )?;
        println!("Token template deployed at: {:?}", template.address());

        println!("==> Deploying LaunchFactory");
        let factory = LaunchFactory::load_or_deploy(
            &env,
            LaunchFactoryInitArgs {
                owner: caller,
                token_template: template.address().clone(),
            },
            container,
            750_000_000_000, // High gas for factory deployment
        )?;
        println!("LaunchFactory deployed at: {:?}", factory.address());

        Ok(())
    }
}

/// Scenario to register a new launch on the factory.
pub struct CreateLaunchScenario;

impl Scenario for CreateLaunchScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("name", "Launch token name", NamedCLType::String),
            CommandArg::new("symbol", "Launch token symbol", NamedCLType::String),
            CommandArg::new(
                "price",
                "Stable token units per launch token unit",
                NamedCLType::U256,
            ),
            CommandArg::new("soft_cap", "Funding floor in token units", NamedCLType::U256),
            CommandArg::new("hard_cap", "Funding ceiling in token units", NamedCLType::U256),
            CommandArg::new(
                "purchase_limit",
                "Per-wallet purchase limit in token units",
                NamedCLType::U256,
            ),
            CommandArg::new(
                "stable_token",
                "Address of the payment stable token",
                NamedCLType::Key,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut factory = container.contract_ref::<LaunchFactory>(env)?;
        let name = args.get_single::<String>("name")?;
        let symbol = args.get_single::<String>("symbol")?;
        let price = args.get_single::<U256>("price")?;
        let soft_cap = args.get_single::<U256>("soft_cap")?;
        let hard_cap = args.get_single::<U256>("hard_cap")?;
        let purchase_limit = args.get_single::<U256>("purchase_limit")?;
        let stable_token = args.get_single::<Address>("stable_token")?;

        env.set_gas(300_000_000_000);
        let launch_id = factory.try_create_launch(
            name,
            symbol,
            price,
            soft_cap,
            hard_cap,
            purchase_limit,
            stable_token,
        )?;

        println!("Launch created with id {}", launch_id);
        Ok(())
    }
}

impl ScenarioMetadata for CreateLaunchScenario {
    const NAME: &'static str = "create-launch";
    const DESCRIPTION: &'static str = "Registers a new token launch on the factory";
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for the launchpad smart contracts")
        // Deploy scripts
        .deploy(DeployLaunchpadScript)
        // Contract references
        .contract::<LaunchFactory>()
        .contract::<Token>()
        .contract::<StableToken>()
        // Scenarios
        .scenario(CreateLaunchScenario)
        .build()
        .run();
}
