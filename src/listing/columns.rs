//! Listing table columns

use std::fmt;
use std::str::FromStr;

/// One sortable column of the listing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Country,
    Cases,
    TodayCases,
    Deaths,
    TodayDeaths,
    Recovered,
    TodayRecovered,
    Active,
    Critical,
    CasesPerOneMillion,
    DeathsPerOneMillion,
    Tests,
    TestsPerOneMillion,
    Population,
    OneCasePerPeople,
    OneDeathPerPeople,
    OneTestPerPeople,
    ActivePerOneMillion,
    RecoveredPerOneMillion,
    CriticalPerOneMillion,
}

impl Column {
    /// Columns in display order
    pub const ALL: [Column; 20] = [
        Column::Country,
        Column::Cases,
        Column::TodayCases,
        Column::Deaths,
        Column::TodayDeaths,
        Column::Recovered,
        Column::TodayRecovered,
        Column::Active,
        Column::Critical,
        Column::CasesPerOneMillion,
        Column::DeathsPerOneMillion,
        Column::Tests,
        Column::TestsPerOneMillion,
        Column::Population,
        Column::OneCasePerPeople,
        Column::OneDeathPerPeople,
        Column::OneTestPerPeople,
        Column::ActivePerOneMillion,
        Column::RecoveredPerOneMillion,
        Column::CriticalPerOneMillion,
    ];

    /// Upstream field name this column sorts on
    pub fn id(&self) -> &'static str {
        match self {
            Column::Country => "country",
            Column::Cases => "cases",
            Column::TodayCases => "todayCases",
            Column::Deaths => "deaths",
            Column::TodayDeaths => "todayDeaths",
            Column::Recovered => "recovered",
            Column::TodayRecovered => "todayRecovered",
            Column::Active => "active",
            Column::Critical => "critical",
            Column::CasesPerOneMillion => "casesPerOneMillion",
            Column::DeathsPerOneMillion => "deathsPerOneMillion",
            Column::Tests => "tests",
            Column::TestsPerOneMillion => "testsPerOneMillion",
            Column::Population => "population",
            Column::OneCasePerPeople => "oneCasePerPeople",
            Column::OneDeathPerPeople => "oneDeathPerPeople",
            Column::OneTestPerPeople => "oneTestPerPeople",
            Column::ActivePerOneMillion => "activePerOneMillion",
            Column::RecoveredPerOneMillion => "recoveredPerOneMillion",
            Column::CriticalPerOneMillion => "criticalPerOneMillion",
        }
    }

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            Column::Country => "Country Name",
            Column::Cases => "Cases",
            Column::TodayCases => "Today Cases",
            Column::Deaths => "Deaths",
            Column::TodayDeaths => "Today Deaths",
            Column::Recovered => "Recovered",
            Column::TodayRecovered => "Today Recovered",
            Column::Active => "Active",
            Column::Critical => "Critical",
            Column::CasesPerOneMillion => "Cases Per Million",
            Column::DeathsPerOneMillion => "Deaths Per Million",
            Column::Tests => "Tests",
            Column::TestsPerOneMillion => "Tests Per Million",
            Column::Population => "Population",
            Column::OneCasePerPeople => "One Case Per People",
            Column::OneDeathPerPeople => "One Death Per People",
            Column::OneTestPerPeople => "One Test Per People",
            Column::ActivePerOneMillion => "Active Per Million",
            Column::RecoveredPerOneMillion => "Recovered Per Million",
            Column::CriticalPerOneMillion => "Critical Per Million",
        }
    }

    pub fn from_id(id: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Column {
    type Err = String;

    /// Accepts the field id case-insensitively, with or without
    /// separators ("todayCases", "today_cases", "today-cases")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Column::ALL
            .iter()
            .copied()
            .find(|c| c.id().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown column: {}", s))
    }
}
