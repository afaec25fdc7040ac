//! Contract Aggregate
//!
//! A contract belongs to exactly one client for its whole life. It is open
//! while `end_date` is empty or in the future and closed once the end date
//! is today or earlier. There is no way back to open.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::value_objects::{ClientId, ContractId, CostAmount};

/// Contract aggregate root
#[derive(Clone, Debug, PartialEq)]
pub struct Contract {
    id: ContractId,
    client_id: ClientId,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    cost_amount: CostAmount,
    update_date: NaiveDateTime,
}

/// Contract that has not been stored yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewContract {
    client_id: ClientId,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    cost_amount: CostAmount,
    update_date: NaiveDateTime,
}

impl NewContract {
    /// Build a contract for `client_id`. The start date falls back to the
    /// date part of `now`.
    pub fn new(
        client_id: ClientId,
        cost_amount: CostAmount,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            client_id,
            start_date: start_date.unwrap_or_else(|| now.date()),
            end_date,
            cost_amount,
            update_date: now,
        }
    }

    pub fn client_id(&self) -> ClientId { self.client_id }

    pub fn into_contract(self, id: ContractId) -> Contract {
        Contract {
            id,
            client_id: self.client_id,
            start_date: self.start_date,
            end_date: self.end_date,
            cost_amount: self.cost_amount,
            update_date: self.update_date,
        }
    }
}

impl Contract {
    pub fn id(&self) -> ContractId { self.id }
    pub fn client_id(&self) -> ClientId { self.client_id }
    pub fn start_date(&self) -> NaiveDate { self.start_date }
    pub fn end_date(&self) -> Option<NaiveDate> { self.end_date }
    pub fn cost_amount(&self) -> CostAmount { self.cost_amount }
    pub fn update_date(&self) -> NaiveDateTime { self.update_date }

    /// Open-ended, or ending strictly after `date`
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.end_date.map_or(true, |end| end > date)
    }

    /// Last modified on a day strictly after `cutoff`
    pub fn updated_after(&self, cutoff: NaiveDate) -> bool {
        self.update_date.date() > cutoff
    }

    /// End the contract at `now`'s date if it is still active then.
    /// Returns whether anything changed.
    pub fn close(&mut self, now: NaiveDateTime) -> bool {
        let today = now.date();
        if !self.is_active_on(today) {
            return false;
        }
        self.end_date = Some(today);
        self.touch(now);
        true
    }

    pub fn update_cost_amount(&mut self, amount: CostAmount, now: NaiveDateTime) {
        self.cost_amount = amount;
        self.touch(now);
    }

    fn touch(&mut self, now: NaiveDateTime) {
        self.update_date = now;
    }
}
