use anyhow::{anyhow, bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use log::{debug, error, warn};
use barney_client::client::controller::account::{LoginForm, SignUpForm};
use barney_client::client::controller::composer::{check_submit, compose};
use barney_client::client::controller::fulfillment::finalize;
use barney_client::client::controller::reservation::{availability_query, reservation};
use barney_client::client::model::branch::Branch;
use barney_client::client::model::member::MemberProfile;
use barney_client::client::model::order::{Fulfillment, OrderMode};
use barney_client::client::model::reservation::TIME_SLOTS;
use barney_client::client::state::{CatalogState, OrderAction, OrderDraft, OrderFlow};
use barney_client::client::store::{FileSessionStore, SessionStore};
use barney_client::client::util::time::{helper, parse_date, parse_pickup_time};
use barney_client::client::{ApiClient, ClientConfig, ClientError};

#[derive(Parser, Debug)]
#[command(name = "barney")]
#[command(about = "order drinks and book tables at barney branches", version, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// list all branches
    Branches,
    /// list the drink menu
    Drinks,
    /// list ingredient types for custom drinks
    Types,
    /// list items of one ingredient type
    #[command(arg_required_else_help = true)]
    Items { kind: String },
    /// branches with room for a party
    #[command(arg_required_else_help = true)]
    Available(SlotArgs),
    /// book a table for the logged-in member
    #[command(arg_required_else_help = true)]
    Reserve {
        #[arg(short = 'b', long, help = "Branch id to book at")]
        branch: String,
        #[command(flatten)]
        slot: SlotArgs,
    },
    /// order related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
    #[command(arg_required_else_help = true)]
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    #[command(arg_required_else_help = true)]
    Signup(SignUpArgs),
    /// show the logged-in member
    Profile,
    Logout,
}

#[derive(Debug, Args)]
struct SlotArgs {
    #[arg(long, value_parser = parse_date, help = "Date as YYYY-MM-DD")]
    date: NaiveDate,
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(TIME_SLOTS))]
    time: String,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=20))]
    people: u8,
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
    #[command(flatten)]
    fulfillment: FulfillmentArgs,
    #[arg(long, value_parser = parse_pickup_time, help = "Pickup time as \"YYYY-MM-DD HH:MM:SS\", defaults to now")]
    pickup: Option<NaiveDateTime>,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// order a drink from the menu
    #[command(arg_required_else_help = true)]
    Existing {
        #[arg(long, help = "Drink id from the menu")]
        drink: String,
    },
    /// build a drink from ingredients
    #[command(arg_required_else_help = true)]
    Custom {
        #[arg(long = "item", value_name = "TYPE:ITEM:AMOUNT", num_args = 1.., value_parser = parse_ingredient)]
        items: Vec<Ingredient>,
    },
}

/// Without any of these the order goes out bare, as the drink sheet sends it.
/// Given before the order subcommand.
#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
struct FulfillmentArgs {
    #[arg(long, value_name = "BRANCH_ID")]
    dine_in: Option<String>,
    #[arg(long, value_name = "BRANCH_ID")]
    takeaway: Option<String>,
    #[arg(long, value_name = "ADDRESS")]
    deliver: Option<String>,
}

impl FulfillmentArgs {
    fn into_fulfillment(self) -> Option<Fulfillment> {
        match (self.dine_in, self.takeaway, self.deliver) {
            (Some(branch_id), _, _) => Some(Fulfillment::DineIn { branch_id }),
            (_, Some(branch_id), _) => Some(Fulfillment::Takeaway { branch_id }),
            (_, _, Some(address)) => Some(Fulfillment::Delivery { address }),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
struct SignUpArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    gender: String,
    #[arg(long, value_parser = parse_date)]
    birthday: NaiveDate,
}

#[derive(Debug, Clone)]
struct Ingredient {
    kind: String,
    item: String,
    amount: f64,
}

fn parse_ingredient(s: &str) -> Result<Ingredient, String> {
    let mut parts = s.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(kind), Some(item), Some(raw)) => {
            let amount: f64 = raw.parse().map_err(|e| format!("invalid amount {raw}, {e}"))?;
            if !amount.is_finite() || amount <= 0.0 {
                return Err(format!("amount must be a positive number, got {raw}"));
            }
            Ok(Ingredient {
                kind: kind.to_string(),
                item: item.to_string(),
                amount,
            })
        }
        _ => Err(format!("expected TYPE:ITEM:AMOUNT, got {s}")),
    }
}

pub(crate) async fn run(cli: Cli, config: ClientConfig) -> Result<(), anyhow::Error> {
    let api = ApiClient::new(&config)?;
    let session = FileSessionStore::new(&config.session_path);

    match cli.command {
        Commands::Branches => {
            let state = CatalogState::default().begin().apply(api.get_all_branches().await);
            report(&state)?;
            for branch in &state.items {
                print_branch(branch);
            }
        }
        Commands::Drinks => {
            let state = CatalogState::default().begin().apply(api.get_all_recipes().await);
            report(&state)?;
            for drink in &state.items {
                println!("{}\t{} ({}, {}, intensity {})", drink.id, drink.drink_name, drink.flavor, drink.mood, drink.intensity);
            }
        }
        Commands::Types => {
            for kind in api.get_types().await? {
                println!("{}", kind);
            }
        }
        Commands::Items { kind } => {
            let res = api.get_items(&kind).await?;
            for item in res.items {
                println!("{}\t{}", item, res.unit);
            }
        }
        Commands::Available(SlotArgs { date, time, people }) => {
            let query = availability_query(date, &time, people)?;
            let branches = api.get_available_branches(&query).await?;
            if branches.is_empty() {
                println!("no branch has room for {} on {} at {}", people, date, time);
            }
            for branch in &branches {
                print_branch(branch);
            }
        }
        Commands::Reserve { branch, slot: SlotArgs { date, time, people } } => {
            let member = logged_in(&session)?;
            let request = reservation(&branch, date, &time, &member.member_id, people)?;
            api.make_reservation(&request).await?;
            println!("Reservation confirmed for branch {} on {} at {} for {} people.", branch, date, time, people);
        }
        Commands::Order(args) => order(&api, &session, args).await?,
        Commands::Login { email, password } => {
            let request = LoginForm { email: email.clone(), password }.into_request()?;
            let res = match api.login(&request).await {
                Err(ClientError::LoginRejected) => bail!("invalid email or password"),
                other => other?,
            };
            match MemberProfile::from_login(&email, &res) {
                Some(profile) => {
                    session.save(&profile)?;
                    println!("Welcome back, {}", profile.display_name());
                }
                None => warn!("login succeeded but no member id was returned, session not saved"),
            }
        }
        Commands::Signup(args) => {
            let form = SignUpForm {
                email: args.email,
                phone_number: args.phone,
                password: args.password,
                first_name: args.first_name,
                last_name: args.last_name,
                gender: args.gender,
                birthday: args.birthday,
            };
            let request = form.into_request()?;
            api.sign_up(&request).await?;
            println!("Signed up {}, please log in", request.email);
        }
        Commands::Profile => {
            let member = logged_in(&session)?;
            println!("Name:\t{}", member.display_name());
            println!("Email:\t{}", member.email);
            println!("Phone:\t{}", member.phone);
            println!("Gender:\t{}", member.gender);
        }
        Commands::Logout => {
            session.clear()?;
            println!("logged out");
        }
    };
    Ok(())
}

async fn order(api: &ApiClient, session: &impl SessionStore, args: OrderArgs) -> Result<(), anyhow::Error> {
    let mut draft = OrderDraft::default();
    match args.command {
        OrderCmds::Existing { drink } => {
            let drinks = api.get_all_recipes().await?;
            let chosen = drinks
                .into_iter()
                .find(|d| d.id == drink)
                .ok_or_else(|| anyhow!("drink {} is not on the menu", drink))?;
            draft = draft.reduce(OrderAction::ChooseDrink(chosen));
        }
        OrderCmds::Custom { items } => {
            draft = draft.reduce(OrderAction::SelectMode(OrderMode::Custom));
            for (index, ingredient) in items.into_iter().enumerate() {
                if index > 0 {
                    draft = draft.reduce(OrderAction::AddSelection);
                }
                let available = api
                    .get_items(&ingredient.kind)
                    .await
                    .with_context(|| format!("failed to fetch items for type {}", ingredient.kind))?;
                if !available.items.contains(&ingredient.item) {
                    warn!("{} is not listed under {}", ingredient.item, ingredient.kind);
                }
                draft = draft
                    .reduce(OrderAction::SetType { index, kind: ingredient.kind, unit: available.unit })
                    .reduce(OrderAction::SetItem { index, item: ingredient.item })
                    .reduce(OrderAction::SetAmount { index, amount: ingredient.amount });
            }
        }
    }

    let flow = OrderFlow::default().on_draft(&draft);
    if flow != OrderFlow::Eligible {
        check_submit(draft.mode, draft.drink.as_ref(), &draft.selections)?;
    }
    let order = compose(draft.mode, draft.drink.as_ref(), &draft.selections)?;
    let flow = flow.finalize()?;

    let result = match args.fulfillment.into_fulfillment() {
        None => {
            let flow = flow.submit()?;
            let result = api.submit_order(&order).await;
            debug!("order flow ended {:?}", flow.complete(&result));
            result
        }
        Some(fulfillment) => {
            let member = logged_in(session)?;
            let pickup = args.pickup.unwrap_or_else(helper::get_local_now);
            let final_order = finalize(order, fulfillment, &member.member_id, pickup)?;
            let flow = flow.submit()?;
            let result = api.post_order(&final_order).await;
            debug!("order flow ended {:?}", flow.complete(&result));
            result
        }
    };

    match result {
        Ok(()) => {
            println!("Your order has been submitted successfully!");
            Ok(())
        }
        Err(e) => {
            error!("order submission failed, {}", e);
            Err(e.into())
        }
    }
}

fn logged_in(session: &impl SessionStore) -> Result<MemberProfile, anyhow::Error> {
    session.load()?.ok_or_else(|| anyhow!("not logged in, run `barney login` first"))
}

fn report<T>(state: &CatalogState<T>) -> Result<(), anyhow::Error> {
    if let Some(e) = &state.error {
        bail!("failed to fetch catalog, {}", e);
    }
    if state.items.is_empty() {
        println!("nothing to show");
    }
    Ok(())
}

fn print_branch(branch: &Branch) {
    println!("{}\t{}\t{}\t{}\t{} seats", branch.id, branch.name, branch.phone, branch.address, branch.seats);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_ingredients() {
        let ingredient = parse_ingredient("Tea:Green:500").unwrap();
        assert_eq!(ingredient.kind, "Tea");
        assert_eq!(ingredient.item, "Green");
        assert_eq!(ingredient.amount, 500.0);
        assert!(parse_ingredient("Tea:Green").is_err());
        assert!(parse_ingredient("Tea:Green:lots").is_err());
        assert!(parse_ingredient("Tea:Green:inf").is_err());
        assert!(parse_ingredient("Tea:Green:NaN").is_err());
        assert!(parse_ingredient("Tea:Green:0").is_err());
    }

    #[test]
    fn fulfillment_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["barney", "order", "--dine-in", "1", "--deliver", "x", "existing", "--drink", "d1"]).is_err());
        let cli = Cli::try_parse_from(["barney", "order", "--takeaway", "2", "existing", "--drink", "d1"]).unwrap();
        match cli.command {
            Commands::Order(args) => assert_eq!(
                args.fulfillment.into_fulfillment(),
                Some(Fulfillment::Takeaway { branch_id: "2".into() })
            ),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn slots_are_validated_by_the_parser() {
        assert!(Cli::try_parse_from(["barney", "available", "--date", "2024-05-01", "--time", "20:00", "--people", "3"]).is_ok());
        assert!(Cli::try_parse_from(["barney", "available", "--date", "2024-05-01", "--time", "20:30"]).is_err());
        assert!(Cli::try_parse_from(["barney", "available", "--date", "2024-05-01", "--time", "20:00", "--people", "21"]).is_err());
    }
}
