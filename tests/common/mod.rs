#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockStream;

use chrono::NaiveDate;
use entity_csv::entity;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const EMPLOYEE_FIELDS: [&str; 9] = [
    "EmployeeID",
    "Grade",
    "Floor",
    "Badge",
    "SalaryCents",
    "Active",
    "Rating",
    "Bonus",
    "HiredOn",
];

/// An entity exercising every supported field type.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub grade: i8,
    pub floor: i16,
    pub badge: i32,
    pub salary_cents: i64,
    pub active: bool,
    pub rating: f32,
    pub bonus: f64,
    pub hired_on: NaiveDate,
}

impl Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn grade(&self) -> i8 {
        self.grade
    }

    fn set_grade(&mut self, grade: i8) {
        self.grade = grade;
    }

    fn floor(&self) -> i16 {
        self.floor
    }

    fn set_floor(&mut self, floor: i16) {
        self.floor = floor;
    }

    fn badge(&self) -> i32 {
        self.badge
    }

    fn set_badge(&mut self, badge: i32) {
        self.badge = badge;
    }

    fn salary_cents(&self) -> i64 {
        self.salary_cents
    }

    fn set_salary_cents(&mut self, salary_cents: i64) {
        self.salary_cents = salary_cents;
    }

    fn active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn set_rating(&mut self, rating: f32) {
        self.rating = rating;
    }

    fn bonus(&self) -> f64 {
        self.bonus
    }

    fn set_bonus(&mut self, bonus: f64) {
        self.bonus = bonus;
    }

    fn hired_on(&self) -> NaiveDate {
        self.hired_on
    }

    fn set_hired_on(&mut self, hired_on: NaiveDate) {
        self.hired_on = hired_on;
    }
}

entity! {
    Employee {
        readers {
            getEmployeeID => id,
            getGrade => grade,
            getFloor => floor,
            getBadge => badge,
            getSalaryCents => salary_cents,
            getActive => active,
            getRating => rating,
            getBonus => bonus,
            getHiredOn => hired_on,
        }
        writers {
            setEmployeeID(String) => set_id,
            setGrade(i8) => set_grade,
            setFloor(i16) => set_floor,
            setBadge(i32) => set_badge,
            setSalaryCents(i64) => set_salary_cents,
            setActive(bool) => set_active,
            setRating(f32) => set_rating,
            setBonus(f64) => set_bonus,
            setHiredOn(NaiveDate) => set_hired_on,
        }
    }
}

/// Shares the `EmployeeID` column with [`Employee`], has no reader for its pass code.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Visitor {
    pub id: String,
    pub host: String,
    pub pass_code: String,
}

impl Visitor {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn set_host(&mut self, host: String) {
        self.host = host;
    }

    fn set_pass_code(&mut self, pass_code: String) {
        self.pass_code = pass_code;
    }
}

entity! {
    Visitor {
        readers {
            getEmployeeID => id,
            getHost => host,
        }
        writers {
            setEmployeeID(String) => set_id,
            setHost(String) => set_host,
            setPassCode(String) => set_pass_code,
        }
    }
}

pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "E001".to_string(),
            grade: 3,
            floor: -2,
            badge: 40211,
            salary_cents: 5_400_000,
            active: true,
            rating: 4.5,
            bonus: 1250.75,
            hired_on: date(29, 2, 2024),
        },
        Employee {
            id: "E002".to_string(),
            grade: -1,
            floor: 12,
            badge: 7,
            salary_cents: 9_000_000_000,
            active: false,
            rating: 0.0,
            bonus: -3.5e-3,
            hired_on: date(1, 12, 1999),
        },
    ]
}
