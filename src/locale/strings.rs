use std::collections::BTreeMap;

use super::Locale;
use crate::core::CompoundingFrequency;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LabelKey {
    Title,
    Description,
    InitialInvestment,
    AnnualReturn,
    AnnualReturnTooltip,
    Years,
    CompoundingFrequency,
    CompoundingFrequencyTooltip,
    Annually,
    Monthly,
    Daily,
    MonthlyContributions,
    InflationRate,
    InflationRateTooltip,
    Results,
    FutureValue,
    InflationAdjustedValue,
    TotalContributions,
    TotalGain,
    Year,
}

impl LabelKey {
    pub const ALL: [LabelKey; 20] = [
        LabelKey::Title,
        LabelKey::Description,
        LabelKey::InitialInvestment,
        LabelKey::AnnualReturn,
        LabelKey::AnnualReturnTooltip,
        LabelKey::Years,
        LabelKey::CompoundingFrequency,
        LabelKey::CompoundingFrequencyTooltip,
        LabelKey::Annually,
        LabelKey::Monthly,
        LabelKey::Daily,
        LabelKey::MonthlyContributions,
        LabelKey::InflationRate,
        LabelKey::InflationRateTooltip,
        LabelKey::Results,
        LabelKey::FutureValue,
        LabelKey::InflationAdjustedValue,
        LabelKey::TotalContributions,
        LabelKey::TotalGain,
        LabelKey::Year,
    ];

    /// Key used by the web front end's lookup table.
    pub fn key(self) -> &'static str {
        match self {
            LabelKey::Title => "title",
            LabelKey::Description => "description",
            LabelKey::InitialInvestment => "initialInvestment",
            LabelKey::AnnualReturn => "annualReturn",
            LabelKey::AnnualReturnTooltip => "annualReturnTooltip",
            LabelKey::Years => "years",
            LabelKey::CompoundingFrequency => "compoundingFrequency",
            LabelKey::CompoundingFrequencyTooltip => "compoundingFrequencyTooltip",
            LabelKey::Annually => "annually",
            LabelKey::Monthly => "monthly",
            LabelKey::Daily => "daily",
            LabelKey::MonthlyContributions => "monthlyContributions",
            LabelKey::InflationRate => "inflationRate",
            LabelKey::InflationRateTooltip => "inflationRateTooltip",
            LabelKey::Results => "results",
            LabelKey::FutureValue => "futureValue",
            LabelKey::InflationAdjustedValue => "inflationAdjustedValue",
            LabelKey::TotalContributions => "totalContributions",
            LabelKey::TotalGain => "totalGain",
            LabelKey::Year => "year",
        }
    }
}

pub fn label(locale: Locale, key: LabelKey) -> &'static str {
    match locale {
        Locale::English => english(key),
        Locale::Norwegian => norwegian(key),
    }
}

/// Full table for one locale, keyed by `LabelKey::key`.
pub fn labels(locale: Locale) -> BTreeMap<&'static str, &'static str> {
    LabelKey::ALL
        .iter()
        .map(|&key| (key.key(), label(locale, key)))
        .collect()
}

pub fn frequency_label(locale: Locale, frequency: CompoundingFrequency) -> &'static str {
    let key = match frequency {
        CompoundingFrequency::Annually => LabelKey::Annually,
        CompoundingFrequency::Monthly => LabelKey::Monthly,
        CompoundingFrequency::Daily => LabelKey::Daily,
    };
    label(locale, key)
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::Title => "Investment Calculator",
        LabelKey::Description => "Estimate how your investment grows over time",
        LabelKey::InitialInvestment => "Initial Investment",
        LabelKey::AnnualReturn => "Expected Annual Return (%)",
        LabelKey::AnnualReturnTooltip => {
            "The average yearly return you expect, before inflation"
        }
        LabelKey::Years => "Investment Period (Years)",
        LabelKey::CompoundingFrequency => "Compounding Frequency",
        LabelKey::CompoundingFrequencyTooltip => {
            "How often returns are added to the balance and start earning returns themselves"
        }
        LabelKey::Annually => "Annually",
        LabelKey::Monthly => "Monthly",
        LabelKey::Daily => "Daily",
        LabelKey::MonthlyContributions => "Monthly Contributions",
        LabelKey::InflationRate => "Expected Inflation Rate (%)",
        LabelKey::InflationRateTooltip => {
            "The average yearly rise in prices, which reduces purchasing power"
        }
        LabelKey::Results => "Results",
        LabelKey::FutureValue => "Future Value",
        LabelKey::InflationAdjustedValue => "Inflation-Adjusted Value",
        LabelKey::TotalContributions => "Total Contributions",
        LabelKey::TotalGain => "Total Gain",
        LabelKey::Year => "Year",
    }
}

fn norwegian(key: LabelKey) -> &'static str {
    match key {
        LabelKey::Title => "Investeringskalkulator",
        LabelKey::Description => "Se hvordan investeringen din vokser over tid",
        LabelKey::InitialInvestment => "Startbeløp",
        LabelKey::AnnualReturn => "Forventet årlig avkastning (%)",
        LabelKey::AnnualReturnTooltip => {
            "Den gjennomsnittlige årlige avkastningen du forventer, før inflasjon"
        }
        LabelKey::Years => "Investeringsperiode (år)",
        LabelKey::CompoundingFrequency => "Renteberegning",
        LabelKey::CompoundingFrequencyTooltip => {
            "Hvor ofte avkastningen legges til saldoen og selv begynner å gi avkastning"
        }
        LabelKey::Annually => "Årlig",
        LabelKey::Monthly => "Månedlig",
        LabelKey::Daily => "Daglig",
        LabelKey::MonthlyContributions => "Månedlig sparebeløp",
        LabelKey::InflationRate => "Forventet inflasjon (%)",
        LabelKey::InflationRateTooltip => {
            "Den gjennomsnittlige årlige prisveksten, som reduserer kjøpekraften"
        }
        LabelKey::Results => "Resultater",
        LabelKey::FutureValue => "Fremtidig verdi",
        LabelKey::InflationAdjustedValue => "Inflasjonsjustert verdi",
        LabelKey::TotalContributions => "Totalt innskudd",
        LabelKey::TotalGain => "Total gevinst",
        LabelKey::Year => "År",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_key_is_translated_in_both_locales() {
        for locale in Locale::ALL {
            let table = labels(locale);
            assert_eq!(table.len(), LabelKey::ALL.len());
            assert!(table.values().all(|text| !text.trim().is_empty()));
        }
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = LabelKey::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), LabelKey::ALL.len());
    }

    #[test]
    fn locales_differ_on_visible_labels() {
        assert_ne!(
            label(Locale::English, LabelKey::FutureValue),
            label(Locale::Norwegian, LabelKey::FutureValue)
        );
        assert_eq!(
            frequency_label(Locale::Norwegian, CompoundingFrequency::Monthly),
            "Månedlig"
        );
    }
}
