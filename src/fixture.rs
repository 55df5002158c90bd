//! Test fixtures shared by the unit tests of all sorts.

use core::cmp::Ordering;
use ndarray::{Array1, arr1};

/// A named record with duplicate ages and years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
	pub name: &'static str,
	pub age: u32,
	pub year: u32,
}

impl Member {
	const fn new(name: &'static str, age: u32, year: u32) -> Self {
		Self { name, age, year }
	}
}

const MEMBERS: [Member; 10] = [
	Member::new("Afiq", 22, 4),
	Member::new("David", 20, 2),
	Member::new("Eric", 26, 2),
	Member::new("Julia", 20, 3),
	Member::new("Carey", 21, 3),
	Member::new("Raymond", 20, 2),
	Member::new("Saikrishna", 20, 3),
	Member::new("Jonathan", 20, 3),
	Member::new("Makoto", 19, 2),
	Member::new("Cory", 21, 3),
];

/// The ten members in their original order.
pub fn members() -> Array1<Member> {
	arr1(&MEMBERS)
}

/// The ten members ordered by name.
pub fn members_by_name() -> Array1<Member> {
	[0, 4, 9, 1, 2, 7, 3, 8, 5, 6]
		.into_iter()
		.map(|i| MEMBERS[i])
		.collect()
}

/// The ten members stably ordered by age.
pub fn members_by_age() -> Array1<Member> {
	[8, 1, 3, 5, 6, 7, 4, 9, 0, 2]
		.into_iter()
		.map(|i| MEMBERS[i])
		.collect()
}

pub fn by_name(a: &Member, b: &Member) -> Ordering {
	a.name.cmp(b.name)
}

pub fn by_age(a: &Member, b: &Member) -> Ordering {
	a.age.cmp(&b.age)
}

pub fn by_year(a: &Member, b: &Member) -> Ordering {
	a.year.cmp(&b.year)
}

/// A value tagged with its original position, compared by value only.
#[derive(Debug, Clone, Copy)]
pub struct Item {
	pub index: usize,
	pub value: u8,
}

impl Eq for Item {}

impl PartialEq for Item {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Ord for Item {
	fn cmp(&self, other: &Self) -> Ordering {
		self.value.cmp(&other.value)
	}
}

impl PartialOrd for Item {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl From<(usize, u8)> for Item {
	fn from((index, value): (usize, u8)) -> Self {
		Self { index, value }
	}
}

/// Tags every value with its position.
pub fn items(xs: &[u8]) -> Vec<Item> {
	xs.iter().copied().enumerate().map(Item::from).collect()
}
