use crate::core::derive::{
    InputPolicy, derive_record, parse_amount, parse_distance, parse_fuel_type,
};
use crate::core::ledger::Ledger;
use crate::db::kv::KvStore;
use crate::errors::AppResult;
use crate::models::record::DailyRecord;

/// Fields typed in the edit flow; `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditFields<'a> {
    pub revenue: Option<&'a str>,
    pub fuel: Option<&'a str>,
    pub variable_costs: Option<&'a str>,
    pub kilometers: Option<&'a str>,
    pub fuel_type: Option<&'a str>,
}

impl EditFields<'_> {
    pub fn is_empty(&self) -> bool {
        self.revenue.is_none()
            && self.fuel.is_none()
            && self.variable_costs.is_none()
            && self.kilometers.is_none()
            && self.fuel_type.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Rewrite a record with the given fields, keeping id and date and
    /// recomputing profit and efficiency.
    ///
    /// Returns the previous and the updated record, or `None` when no record
    /// matches `id_or_prefix`.
    pub fn apply<S: KvStore>(
        ledger: &mut Ledger<S>,
        id_or_prefix: &str,
        fields: &EditFields<'_>,
        policy: InputPolicy,
    ) -> AppResult<Option<(DailyRecord, DailyRecord)>> {
        let Some(current) = ledger.find(id_or_prefix)?.cloned() else {
            return Ok(None);
        };

        let mut input = current.input();
        if let Some(v) = fields.revenue {
            input.revenue = parse_amount("revenue", v, policy)?;
        }
        if let Some(v) = fields.fuel {
            input.fuel = parse_amount("fuel", v, policy)?;
        }
        if let Some(v) = fields.variable_costs {
            input.variable_costs = parse_amount("variable costs", v, policy)?;
        }
        if let Some(v) = fields.kilometers {
            input.kilometers = parse_distance(v, policy)?;
        }
        if let Some(ft) = parse_fuel_type(fields.fuel_type)? {
            input.fuel_type = Some(ft);
        }

        let updated = ledger.update(&current.id, derive_record(&input, current.date))?;
        Ok(updated.map(|u| (current, u)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::core::derive::RawInput;
    use crate::db::kv::MemoryKv;
    use crate::models::fuel_type::FuelType;
    use chrono::{TimeZone, Utc};

    fn seeded() -> (Ledger<MemoryKv>, DailyRecord) {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        let raw = RawInput {
            revenue: "300",
            fuel: "58.9",
            variable_costs: "20",
            kilometers: "120",
            fuel_type: None,
        };
        let date = Utc.with_ymd_and_hms(2025, 6, 10, 21, 0, 0).unwrap();
        let rec = AddLogic::apply(&mut ledger, &raw, date, InputPolicy::Strict).unwrap();
        (ledger, rec)
    }

    #[test]
    fn edit_recomputes_and_preserves_id_and_date() {
        let (mut ledger, rec) = seeded();
        let fields = EditFields {
            revenue: Some("350"),
            fuel_type: Some("cng"),
            ..Default::default()
        };

        let (before, after) = EditLogic::apply(&mut ledger, &rec.id[..8], &fields, InputPolicy::Strict)
            .unwrap()
            .unwrap();

        assert_eq!(before, rec);
        assert_eq!(after.id, rec.id);
        assert_eq!(after.date, rec.date);
        assert_eq!(after.revenue, 350.0);
        assert_eq!(after.fuel, 58.9);
        assert!((after.net_profit - 271.1).abs() < 1e-9);
        assert_eq!(after.fuel_type, Some(FuelType::Cng));
        // 58.9 / 4.50 liters for 120 km
        let expected = 120.0 / (58.9 / 4.5);
        assert!((after.fuel_efficiency.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn clearing_kilometers_drops_efficiency() {
        let (mut ledger, rec) = seeded();
        let fields = EditFields {
            kilometers: Some("0"),
            ..Default::default()
        };
        let (_, after) = EditLogic::apply(&mut ledger, &rec.id, &fields, InputPolicy::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(after.kilometers, None);
        assert_eq!(after.fuel_efficiency, None);
    }

    #[test]
    fn invalid_amount_leaves_record_untouched() {
        let (mut ledger, rec) = seeded();
        let fields = EditFields {
            fuel: Some("fifty"),
            ..Default::default()
        };
        assert!(EditLogic::apply(&mut ledger, &rec.id, &fields, InputPolicy::Strict).is_err());
        assert_eq!(ledger.list()[0], rec);
    }

    #[test]
    fn unknown_id_is_none() {
        let (mut ledger, _) = seeded();
        let res = EditLogic::apply(&mut ledger, "ffffffff-0000", &EditFields::default(), InputPolicy::Strict)
            .unwrap();
        assert!(res.is_none());
    }
}
