//! Trolley checkout
//!
//! Loads a fixture set, shows the user's cart and checks it out.
//!
//! Use `-f` to load a fixture set by name
//! Use `-d` to override the fixture's discount ("10%", "5.00 USD" or "none")
//! Use `-t` to also print the cart as a table

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use trolley::{
    config::CheckoutArgs,
    fixtures::{Fixture, discounts::parse_discount},
    observability::init_subscriber,
};

fn main() -> Result<()> {
    let args = CheckoutArgs::parse();

    init_subscriber(&args.logging)?;

    let mut fixture = Fixture::with_base_path(args.fixtures_dir.clone());
    fixture.load(&args.fixture)?;

    let mut user = fixture.user()?;

    info!(user_id = user.id, name = %user.name, items = user.cart().len(), "Loaded cart");

    let override_discount = args.discount.as_deref().map(parse_discount).transpose()?;

    let discount = match &override_discount {
        Some(choice) => choice.as_deref(),
        None => fixture.discount(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    user.cart().write_to(&mut handle)?;

    if args.table {
        user.cart().write_table(&mut handle)?;
    }

    user.checkout(discount)?.write_to(&mut handle)?;

    handle.flush()?;

    Ok(())
}
