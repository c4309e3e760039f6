//! Net worth totals and snapshot recording

use chrono::NaiveDate;

use crate::models::{Asset, Liability, Money, NetWorthSnapshot};

/// Sum of all asset values
pub fn total_assets(assets: &[Asset]) -> Money {
    assets.iter().map(|a| a.value).sum()
}

/// Sum of all liability balances
pub fn total_liabilities(liabilities: &[Liability]) -> Money {
    liabilities.iter().map(|l| l.balance).sum()
}

/// Net worth right now: assets minus liabilities
pub fn current_net_worth(assets: &[Asset], liabilities: &[Liability]) -> Money {
    total_assets(assets) - total_liabilities(liabilities)
}

/// Record a snapshot for the given day into the history
///
/// At most one snapshot exists per calendar date. A second recording on the
/// same day overwrites the first in place instead of appending.
pub fn record_snapshot(
    assets: &[Asset],
    liabilities: &[Liability],
    history: &mut Vec<NetWorthSnapshot>,
    today: NaiveDate,
) -> NetWorthSnapshot {
    let snapshot = NetWorthSnapshot {
        date: today,
        total_assets: total_assets(assets),
        total_liabilities: total_liabilities(liabilities),
        net_worth: current_net_worth(assets, liabilities),
    };

    match history.iter_mut().find(|s| s.date == today) {
        Some(existing) => *existing = snapshot.clone(),
        None => history.push(snapshot.clone()),
    }

    snapshot
}
