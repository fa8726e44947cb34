//! The record store: newest-first list of records plus the user settings,
//! written through to a key-value store on every mutation.

use crate::db::kv::{KvStore, RECORDS_KEY, SETTINGS_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::record::{DailyRecord, NewRecord};
use crate::models::settings::UserSettings;
use uuid::Uuid;

pub struct Ledger<S: KvStore> {
    kv: S,
    records: Vec<DailyRecord>,
    settings: UserSettings,
}

impl<S: KvStore> Ledger<S> {
    /// Read both blobs. Missing blobs mean an empty list and default settings.
    pub fn load(kv: S) -> AppResult<Self> {
        let records = match kv.load(RECORDS_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        let settings = match kv.load(SETTINGS_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => UserSettings::default(),
        };

        Ok(Self {
            kv,
            records,
            settings,
        })
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Newest first.
    pub fn list(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&DailyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolve a full id or a unique prefix of one.
    pub fn find(&self, id_or_prefix: &str) -> AppResult<Option<&DailyRecord>> {
        if let Some(exact) = self.get(id_or_prefix) {
            return Ok(Some(exact));
        }
        if id_or_prefix.is_empty() {
            return Ok(None);
        }

        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(Some(r)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(id_or_prefix.to_string())),
        }
    }

    pub fn add(&mut self, record: NewRecord) -> AppResult<DailyRecord> {
        let created = DailyRecord::from_new(Uuid::new_v4().to_string(), record);
        self.records.insert(0, created.clone());
        self.persist_records()?;
        Ok(created)
    }

    /// Replace every field of record `id`. Unknown id: `Ok(None)`, nothing written.
    pub fn update(&mut self, id: &str, record: NewRecord) -> AppResult<Option<DailyRecord>> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        *slot = DailyRecord::from_new(id.to_string(), record);
        let updated = slot.clone();
        self.persist_records()?;
        Ok(Some(updated))
    }

    /// Remove record `id`. Unknown id: `Ok(false)`, nothing written.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist_records()?;
        Ok(true)
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: UserSettings) -> AppResult<()> {
        settings.validate()?;
        self.settings = settings;
        let json = serde_json::to_string(&self.settings)?;
        self.kv.save(SETTINGS_KEY, &json)
    }

    fn persist_records(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.kv.save(RECORDS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive::derive_record;
    use crate::db::kv::MemoryKv;
    use crate::models::fuel_type::FuelType;
    use crate::models::record::RecordInput;
    use chrono::{TimeZone, Utc};

    fn new_record(revenue: f64, fuel: f64) -> NewRecord {
        let input = RecordInput {
            revenue,
            fuel,
            variable_costs: 12.5,
            kilometers: Some(140.0),
            fuel_type: Some(FuelType::Ethanol),
        };
        derive_record(&input, Utc.with_ymd_and_hms(2025, 6, 18, 14, 0, 0).unwrap())
    }

    /// Store that counts writes, to check write-through.
    #[derive(Default)]
    struct CountingKv {
        inner: MemoryKv,
        writes: usize,
    }

    impl KvStore for CountingKv {
        fn load(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
            self.writes += 1;
            self.inner.save(key, value)
        }
    }

    #[test]
    fn add_prepends_and_generates_ids() {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        let first = ledger.add(new_record(100.0, 20.0)).unwrap();
        let second = ledger.add(new_record(200.0, 30.0)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ledger.list()[0].id, second.id);
        assert_eq!(ledger.list()[1].id, first.id);
        assert_eq!(ledger.list()[0].net_profit, 157.5);
    }

    #[test]
    fn delete_twice_is_a_noop() {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        let rec = ledger.add(new_record(100.0, 20.0)).unwrap();

        assert!(ledger.delete(&rec.id).unwrap());
        assert!(ledger.list().iter().all(|r| r.id != rec.id));
        assert!(!ledger.delete(&rec.id).unwrap());
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        let old = ledger.add(new_record(100.0, 20.0)).unwrap();
        ledger.add(new_record(50.0, 5.0)).unwrap();

        let updated = ledger
            .update(&old.id, new_record(300.0, 40.0))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, old.id);
        assert_eq!(ledger.list()[1].revenue, 300.0);
        assert_eq!(ledger.list()[1].net_profit, 247.5);

        assert_eq!(ledger.update("missing", new_record(1.0, 1.0)).unwrap(), None);
    }

    #[test]
    fn every_mutation_writes_through() {
        let mut ledger = Ledger::load(CountingKv::default()).unwrap();
        let rec = ledger.add(new_record(100.0, 20.0)).unwrap();
        ledger.update(&rec.id, new_record(110.0, 20.0)).unwrap();
        ledger.delete("nope").unwrap();
        ledger.delete(&rec.id).unwrap();
        ledger.set_settings(UserSettings::default()).unwrap();

        assert_eq!(ledger.kv().writes, 4);
    }

    #[test]
    fn reload_round_trips_records_and_settings() {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        ledger.add(new_record(100.0, 20.0)).unwrap();
        ledger.add(new_record(0.0, 0.0)).unwrap();
        ledger
            .set_settings(UserSettings {
                weekly_goal: 1500.0,
                day_off: 3,
            })
            .unwrap();

        let snapshot = ledger.list().to_vec();
        let kv = ledger.kv().clone();
        let reloaded = Ledger::load(kv).unwrap();

        assert_eq!(reloaded.list(), snapshot.as_slice());
        assert_eq!(reloaded.settings().weekly_goal, 1500.0);
        assert_eq!(reloaded.settings().day_off, 3);
    }

    #[test]
    fn missing_settings_blob_gives_defaults() {
        let ledger = Ledger::load(MemoryKv::new()).unwrap();
        assert_eq!(*ledger.settings(), UserSettings::default());
    }

    #[test]
    fn invalid_settings_are_not_saved() {
        let mut ledger = Ledger::load(MemoryKv::new()).unwrap();
        let bad = UserSettings {
            weekly_goal: -10.0,
            day_off: 2,
        };
        assert!(ledger.set_settings(bad).is_err());
        assert_eq!(*ledger.settings(), UserSettings::default());
        assert_eq!(ledger.kv().load(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn find_by_unique_prefix() {
        let mut kv = MemoryKv::new();
        let json = r#"[
            {"id":"abc111","date":"2025-06-18T12:00:00.000Z","revenue":10,"fuel":0,"variableCosts":0,"netProfit":10},
            {"id":"abc222","date":"2025-06-17T12:00:00.000Z","revenue":20,"fuel":0,"variableCosts":0,"netProfit":20}
        ]"#;
        kv.save(RECORDS_KEY, json).unwrap();
        let ledger = Ledger::load(kv).unwrap();

        assert_eq!(ledger.find("abc2").unwrap().unwrap().revenue, 20.0);
        assert_eq!(ledger.find("abc111").unwrap().unwrap().revenue, 10.0);
        assert!(ledger.find("zzz").unwrap().is_none());
        assert!(matches!(ledger.find("abc"), Err(AppError::AmbiguousId(_))));
    }
}
