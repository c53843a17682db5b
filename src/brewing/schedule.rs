use crate::brewing::dto::HopAddition;

/// Orders hop additions for the brew-day timeline: earliest addition
/// (most minutes left in the boil) first, flameout/whirlpool/dry-hop
/// entries (time 0) last. Stable, so equal times keep their input order.
pub fn order_for_timeline(hops: &[HopAddition]) -> Vec<HopAddition> {
    let mut ordered = hops.to_vec();
    ordered.sort_by(|a, b| b.time.total_cmp(&a.time));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(name: &str, time: f64) -> HopAddition {
        HopAddition {
            hop_name: name.into(),
            amount: 1.0,
            time,
            usage: "Boil".into(),
            usage_badge: "bg-blue-100 text-blue-800",
        }
    }

    #[test]
    fn sorts_by_boil_time_descending() {
        let hops = vec![hop("Citra", 0.0), hop("Magnum", 60.0), hop("Saaz", 15.0)];
        let ordered = order_for_timeline(&hops);
        let times: Vec<f64> = ordered.iter().map(|h| h.time).collect();
        assert_eq!(times, vec![60.0, 15.0, 0.0]);
    }

    #[test]
    fn empty_schedule_stays_empty() {
        assert!(order_for_timeline(&[]).is_empty());
    }

    #[test]
    fn equal_times_keep_input_order() {
        let hops = vec![hop("Mosaic", 0.0), hop("Simcoe", 0.0)];
        let ordered = order_for_timeline(&hops);
        assert_eq!(ordered[0].hop_name, "Mosaic");
        assert_eq!(ordered[1].hop_name, "Simcoe");
    }

    #[test]
    fn input_is_left_untouched() {
        let hops = vec![hop("Citra", 0.0), hop("Magnum", 60.0)];
        let _ = order_for_timeline(&hops);
        assert_eq!(hops[0].hop_name, "Citra");
    }
}
