use clap::Parser;

use ledger::{MoneyCents, SplitType, compute_balances};
use splitexpense::{Action, App, AppError, PaymentMode, Result};
use store::{ExpenseStore, MemoryIdentity, MemoryStore, StoreError};

mod settings;

#[derive(Parser, Debug)]
#[command(name = "splitexpense")]
#[command(about = "Demo driver for the shared-expense ledger (in-memory collaborators)")]
struct Cli {
    /// Settings file (TOML), looked up relative to the working directory.
    #[arg(long, default_value = "settings")]
    settings: String,
    /// Override the log level from the settings file.
    #[arg(long)]
    level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.settings)?;
    let level = cli.level.unwrap_or(settings.app.level);

    tracing_subscriber::fmt()
        .with_env_filter(format!("splitexpense={level},store={level},ledger={level}"))
        .init();

    let identity = MemoryIdentity::new();
    let records = MemoryStore::new();
    let mut app = App::new(identity, records.clone(), records.clone());

    demo_session(&mut app, &settings.demo).await?;

    // Each participant's view over the same records.
    let user = settings.demo.user.clone();
    for member in std::iter::once(&user).chain(settings.demo.friends.iter()) {
        let visible = records.list_for_user(member).await?;
        let summary = compute_balances(&visible, member);
        tracing::info!(
            user = %member,
            total_paid = %summary.total_paid,
            you_owe = %summary.you_owe,
            you_are_owed = %summary.you_are_owed,
            "settlement balance"
        );
    }

    Ok(())
}

/// Walks through one session: sign-up, group creation, a personal expense,
/// an equal split and a custom split.
async fn demo_session(
    app: &mut App<MemoryIdentity, MemoryStore, MemoryStore>,
    demo: &settings::Demo,
) -> Result<()> {
    app.apply(Action::SetAuthEmail(demo.user.clone()));
    app.apply(Action::SetAuthPassword(demo.password.clone()));
    app.apply(Action::ToggleSignUp);
    app.submit_auth().await?;

    app.apply(Action::ToggleGroupForm);
    app.apply(Action::SetGroupName("Flatmates".to_string()));
    app.apply(Action::SetGroupMembers(demo.friends.join(", ")));
    app.create_group().await?;

    let group_id = match app.state.groups.first() {
        Some(group) => group.id.clone(),
        None => {
            return Err(AppError::Store(StoreError::NotFound(
                "demo group".to_string(),
            )));
        }
    };
    let members = app
        .state
        .group(&group_id)
        .map(|group| group.members.clone())
        .unwrap_or_default();

    // Personal expense: only "total paid" should move.
    app.apply(Action::SetDescription("Groceries".to_string()));
    app.apply(Action::SetAmount("100".to_string()));
    app.add_expense().await?;

    // Equal split across the whole group.
    app.apply(Action::SetDescription("Dinner".to_string()));
    app.apply(Action::SetAmount("90".to_string()));
    app.apply(Action::SetPaymentMode(PaymentMode::Group));
    app.apply(Action::SelectGroup(Some(group_id.clone())));
    app.add_expense().await?;

    // Custom split: edit everyone but the last member and let the form
    // balance the remainder automatically.
    app.apply(Action::SetDescription("Taxi".to_string()));
    app.apply(Action::SetAmount("50".to_string()));
    app.apply(Action::SetPaymentMode(PaymentMode::Group));
    app.apply(Action::SelectGroup(Some(group_id)));
    app.apply(Action::SetSplitType(SplitType::Custom));
    for (member, cents) in members.iter().zip([20_00i64, 10_00]) {
        app.apply(Action::EditCustomSplit {
            member: member.clone(),
            value: MoneyCents::new(cents),
        });
    }
    app.add_expense().await?;

    let summary = app.dashboard();
    tracing::info!(
        total_paid = %summary.total_paid,
        you_owe = %summary.you_owe,
        you_are_owed = %summary.you_are_owed,
        "dashboard"
    );

    Ok(())
}
