//! Issuer Grouping & Badge Ordering
//!
//! Groups eligible records by issuer, orders groups by most recent
//! activity and records within a group by tier, then flattens to the
//! badge list consumed by the layout engine.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::info;

use crate::records::Certification;

/// Sort key for records with a missing or zero tier: always last.
const TIER_UNRANKED: u32 = 99;

/// Parse a `YYYY-MM` string as the first day of that month.
///
/// Malformed strings yield `None`; a group whose dates all fail to parse
/// falls back to `NaiveDate::MIN` and sorts behind every dated group.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Eligible records for one issuer, plus the group's most recent date.
#[derive(Debug)]
pub struct IssuerGroup<'a> {
    pub issuer: &'a str,
    pub most_recent: NaiveDate,
    pub certs: Vec<&'a Certification>,
}

fn sort_tier(cert: &Certification) -> u32 {
    match cert.tier {
        Some(t) if t != 0 => t,
        _ => TIER_UNRANKED,
    }
}

/// Group eligible records by exact issuer string.
///
/// Groups come back sorted newest-activity-first; records within a group
/// sorted ascending by tier. Both sorts are stable, and equal `most_recent`
/// dates keep first-seen issuer order, so output order is reproducible.
pub fn group_by_issuer(certs: &[Certification]) -> Vec<IssuerGroup<'_>> {
    let mut groups: Vec<IssuerGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for cert in certs.iter().filter(|c| c.is_eligible()) {
        if let Some(i) = index.get(cert.issuer.as_str()).copied() {
            groups[i].certs.push(cert);
        } else {
            index.insert(&cert.issuer, groups.len());
            groups.push(IssuerGroup {
                issuer: &cert.issuer,
                most_recent: NaiveDate::MIN,
                certs: vec![cert],
            });
        }
    }

    for group in &mut groups {
        group.most_recent = group
            .certs
            .iter()
            .filter_map(|c| parse_month(&c.date))
            .max()
            .unwrap_or(NaiveDate::MIN);
        group.certs.sort_by_key(|c| sort_tier(c));
    }

    groups.sort_by(|a, b| b.most_recent.cmp(&a.most_recent));
    groups
}

/// Flatten the sorted issuer groups into the ordered badge basename list.
///
/// Returns an empty list when nothing is eligible; the pipeline driver
/// decides whether that is fatal.
pub fn ordered_badge_names(certs: &[Certification]) -> Vec<String> {
    let groups = group_by_issuer(certs);

    let mut ordered = Vec::new();
    for group in &groups {
        let summary: Vec<String> = group
            .certs
            .iter()
            .map(|c| match c.tier {
                Some(t) => format!("{} (tier {})", c.name, t),
                None => format!("{} (untiered)", c.name),
            })
            .collect();
        info!("  {}: {}", group.issuer, summary.join(", "));

        for cert in &group.certs {
            if let Some(name) = cert.badge_basename() {
                ordered.push(name.to_string());
            }
        }
    }

    ordered
}
