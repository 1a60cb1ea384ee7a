use application::chat_service::{ChatService, TurnOutcome, EXIT_KEYWORD};
use clap::Parser;
use colored::Colorize;
use domain::completion::CompletionClient;
use domain::customer::CustomerRecord;
use domain::prompt::compose_system_prompt;
use infrastructure::config::AgentConfig;
use infrastructure::customer_loader::{load_customer, RowSelector};
use infrastructure::openai_client::OpenAiClient;
use shared::prompt::ask_chat_turn;
use shared::telemetry::init_logging;
use shared::types::Result;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "loan_nudge")]
#[command(
    about = "Chat assistant that helps customers explore their pre-approved loan offer",
    long_about = "Loads a customer's pre-approved loan offer from CUSTOMER_DATA_PATH and \
                  chats about it through an OpenAI-compatible model. Configuration is read \
                  from the environment (or a .env file); OPENAI_API_KEY is required.",
    version
)]
pub struct Cli {}

pub struct CliApp<C> {
    service: ChatService<C>,
    customer: CustomerRecord,
}

impl CliApp<OpenAiClient> {
    /// Resolve configuration, load the customer and prepare the chat session.
    /// Any failure here is fatal.
    pub fn bootstrap() -> Result<Self> {
        let config = AgentConfig::load()?;
        init_logging(Some(&config.log_file_path));
        info!(?config, "configuration loaded");

        let selector = RowSelector::from_customer_id(config.customer_id.clone());
        let customer = load_customer(&config.customer_data_path, &selector)?;
        let client = OpenAiClient::new(&config);
        Ok(Self::new(client, customer))
    }
}

impl<C: CompletionClient> CliApp<C> {
    pub fn new(client: C, customer: CustomerRecord) -> Self {
        let system_prompt = compose_system_prompt(&customer);
        Self {
            service: ChatService::new(client, system_prompt),
            customer,
        }
    }

    pub async fn run(&mut self, _cli: Cli) -> Result<()> {
        println!(
            "{} Chatting about {}'s loan offer. Type '{}' to exit.",
            "Loan re-engagement bot ready.".green().bold(),
            self.customer.display_name(),
            EXIT_KEYWORD
        );

        loop {
            let Some(input) = ask_chat_turn("Customer")? else {
                self.service.end();
                break;
            };
            match self.service.handle_line(&input).await {
                Ok(TurnOutcome::Exit) => break,
                Ok(TurnOutcome::Skipped) => continue,
                Ok(TurnOutcome::Reply(reply)) => {
                    println!("\n{} {}\n", "Bot:".cyan().bold(), reply);
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Could not get a reply:".red().bold(),
                        err.to_string().red()
                    );
                    println!("{}", "You can try the message again.".yellow());
                }
            }
        }

        println!("\n{}", "Conversation summary".green().bold());
        println!("{}", self.service.summary());
        Ok(())
    }
}
