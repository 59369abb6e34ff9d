//! Plain-text status report, downloaded as a file. Write-only: the app never
//! reads it back.

use super::achievements::AchievementLedger;
use super::calendar::{birth_instant_ms, elapsed_weeks, iso_timestamp};
use super::state::LifeProfile;
use super::stats::TemporalStats;

pub const EXPORT_FILE_NAME: &str = "EXPORT_LOG.TXT";

const RULE_HEAVY: &str = "=========================================";
const RULE_LIGHT: &str = "-----------------------------------------";

fn status_line(profile: &LifeProfile, now_ms: f64) -> String {
    match profile.birth_date {
        None => "NO_DATA".to_string(),
        Some(date) => {
            let lived = elapsed_weeks(birth_instant_ms(date), now_ms);
            let stats = TemporalStats::new(lived, profile.life_expectancy());
            format!(
                "LIVED: {} | REMAINING: {} | COMPLETION: {:.2}%",
                stats.lived_weeks,
                stats.displayed_remaining_weeks(),
                stats.percentage_consumed
            )
        }
    }
}

fn achievement_lines(ledger: &AchievementLedger) -> String {
    let mut out = String::from("--- ACHIEVEMENT PROTOCOL ---\n");
    let mut any = false;
    for (module, item) in ledger.unlocked_in_catalog_order() {
        any = true;
        out.push_str(&format!("[UNLOCKED] {}: {}\n", module.title, item.label));
    }
    if !any {
        out.push_str("NO ACHIEVEMENTS UNLOCKED.\n");
    }
    out
}

pub fn build_report(profile: &LifeProfile, ledger: &AchievementLedger, now_ms: f64) -> String {
    let origin = profile
        .birth_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "NOT_SET".to_string());

    let mut report = String::new();
    report.push_str(RULE_HEAVY);
    report.push_str("\n      LIFE_OS SYSTEM LOG // MEMORY DUMP\n");
    report.push_str(RULE_HEAVY);
    report.push('\n');
    report.push_str(&format!("TIMESTAMP: {}\n", iso_timestamp(now_ms)));
    report.push_str(&format!("USER_ORIGIN: {origin}\n"));
    report.push_str(&format!("TARGET_CYCLE: {} YEARS\n", profile.life_expectancy()));
    report.push_str(RULE_LIGHT);
    report.push_str("\nSTATUS_REPORT:\n");
    report.push_str(&status_line(profile, now_ms));
    report.push('\n');
    report.push_str(RULE_LIGHT);
    report.push_str("\n\n");
    report.push_str(&achievement_lines(ledger));
    report.push_str(RULE_HEAVY);
    report.push_str("\nEND OF LOG");
    report
}

/// Hand `content` to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_text(file_name: &str, content: &str) -> Option<()> {
    use web_sys::wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()?.document()?;
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::calendar::{parse_birth_date, MS_PER_WEEK};

    fn profile_born(date: &str, years: u32) -> LifeProfile {
        let mut profile = LifeProfile::default();
        profile.birth_date = parse_birth_date(date);
        profile.set_life_expectancy(years);
        profile
    }

    #[test]
    fn report_without_birth_date() {
        let report = build_report(&LifeProfile::default(), &AchievementLedger::new(), 0.0);
        assert!(report.starts_with(RULE_HEAVY));
        assert!(report.contains("TIMESTAMP: 1970-01-01T00:00:00.000Z"));
        assert!(report.contains("USER_ORIGIN: NOT_SET"));
        assert!(report.contains("TARGET_CYCLE: 80 YEARS"));
        assert!(report.contains("STATUS_REPORT:\nNO_DATA\n"));
        assert!(report.contains("NO ACHIEVEMENTS UNLOCKED."));
        assert!(report.ends_with("END OF LOG"));
    }

    #[test]
    fn report_with_stats_and_achievements() {
        let profile = profile_born("1970-01-01", 80);
        let mut ledger = AchievementLedger::new();
        ledger.toggle("res_1");
        ledger.toggle("exp_2");
        let now = 1560.0 * MS_PER_WEEK + 60_000.0;

        let report = build_report(&profile, &ledger, now);
        assert!(report.contains("USER_ORIGIN: 1970-01-01"));
        assert!(report.contains("LIVED: 1560 | REMAINING: 2600 | COMPLETION: 37.50%"));

        let exp = report.find("[UNLOCKED] EXPLORATION: See the Northern Lights").unwrap();
        let res = report.find("[UNLOCKED] RESILIENCE: Run a Marathon").unwrap();
        assert!(exp < res, "catalog order");
        assert!(!report.contains("NO ACHIEVEMENTS UNLOCKED."));
    }

    #[test]
    fn exceeded_report_shows_zero_remaining() {
        let profile = profile_born("1970-01-01", 60);
        let now = 4000.0 * MS_PER_WEEK;
        let report = build_report(&profile, &AchievementLedger::new(), now);
        assert!(report.contains("REMAINING: 0 | COMPLETION: 100.00%"));
    }

    #[test]
    fn unknown_ids_are_not_listed() {
        let mut ledger = AchievementLedger::new();
        ledger.toggle("not_in_catalog");
        let report = build_report(&LifeProfile::default(), &ledger, 0.0);
        assert!(report.contains("NO ACHIEVEMENTS UNLOCKED."));
    }
}
