//! Shorten a URL and look at its clicks.
//!
//! Run with: `BITLY_ACCESS_TOKEN=your-token cargo run --example shorten -- http://example.com/`

use bitly::{Client, ClickCounts, Clicks, MetricsQuery, Shorten, Unit};

fn main() -> Result<(), bitly::Error> {
    let token = std::env::var("BITLY_ACCESS_TOKEN").expect("BITLY_ACCESS_TOKEN must be set");
    let long_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://example.com/".to_string());

    let client = Client::new(token)?;

    let short: Shorten = client.links().shorten(&long_url, None)?.deserialize()?;
    println!("{} -> {}", long_url, short.url);

    let window = MetricsQuery {
        unit: Unit::Day,
        units: 7,
        rollup: Some(true),
        ..Default::default()
    };
    let clicks: Clicks = client
        .link_metrics()
        .clicks(&short.url, &window)?
        .deserialize()?;

    match clicks.link_clicks {
        ClickCounts::Total(n) => println!("Clicks in the last 7 days: {n}"),
        ClickCounts::Series(points) => {
            for p in points {
                println!("{}: {}", p.dt, p.clicks);
            }
        }
    }

    Ok(())
}
