#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ged_reader::models::{Category, Individual, RecordCollection, RuleCode, Violation};
    use ged_reader::{Family, Gender};

    /// Create a test individual
    fn create_test_individual(id: &str, birth_year: i32, gender: Gender) -> Individual {
        let mut individual = Individual::new(id.to_string());
        individual.gender = gender;
        individual.birth_date = NaiveDate::from_ymd_opt(birth_year, 1, 1);
        individual
    }

    #[test]
    fn test_insert_individual_reports_duplicates() {
        let mut collection = RecordCollection::new();
        assert!(collection.insert_individual(Individual::new("@I1@".to_string())));
        assert!(!collection.insert_individual(Individual::new("@I1@".to_string())));
        assert_eq!(collection.individual_count(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut collection = RecordCollection::new();
        for id in ["@I3@", "@I1@", "@I2@"] {
            collection.insert_individual(Individual::new(id.to_string()));
        }

        let ids: Vec<&str> = collection
            .individuals_in_order()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["@I3@", "@I1@", "@I2@"]);
    }

    #[test]
    fn test_individual_name_lookup() {
        let mut collection = RecordCollection::new();
        let mut individual = Individual::new("@I1@".to_string());
        individual.name = "John /Doe/".to_string();
        collection.insert_individual(individual);
        collection.insert_family(Family::new("@F1@".to_string()));

        assert_eq!(collection.individual_name("@I1@"), Some("John /Doe/"));
        assert_eq!(collection.individual_name("@I9@"), None);
    }

    #[test]
    fn test_living_married() {
        let mut collection = RecordCollection::new();

        let mut married = create_test_individual("@I1@", 1970, Gender::Male);
        married.spouse_id = Some("@I2@".to_string());
        collection.insert_individual(married);

        let mut widowed = create_test_individual("@I2@", 1972, Gender::Female);
        widowed.spouse_id = Some("@I1@".to_string());
        widowed.death_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        collection.insert_individual(widowed);

        collection.insert_individual(create_test_individual("@I3@", 1980, Gender::Male));

        let married: Vec<&str> = collection
            .living_married()
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(married, ["@I1@"]);
    }

    #[test]
    fn test_living_singles_over_30() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let mut collection = RecordCollection::new();

        // Single and 43 years old
        collection.insert_individual(create_test_individual("@I1@", 1980, Gender::Female));
        // Single but only 23
        collection.insert_individual(create_test_individual("@I2@", 2000, Gender::Male));
        // Over 30 but married
        let mut married = create_test_individual("@I3@", 1975, Gender::Male);
        married.spouse_id = Some("@I1@".to_string());
        collection.insert_individual(married);

        let singles: Vec<&str> = collection
            .living_singles_over_30(&today)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(singles, ["@I1@"]);
    }

    #[test]
    fn test_deceased() {
        let mut collection = RecordCollection::new();
        collection.insert_individual(create_test_individual("@I1@", 1980, Gender::Male));
        let mut deceased = create_test_individual("@I2@", 1940, Gender::Female);
        deceased.death_date = NaiveDate::from_ymd_opt(2010, 3, 5);
        collection.insert_individual(deceased);

        let ids: Vec<&str> = collection.deceased().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["@I2@"]);
        assert_eq!(collection.deceased()[0].age_at_death(), Some(70));
    }

    #[test]
    fn test_violation_serde_round_trip() {
        let violations = vec![
            Violation::new(
                Category::Individual,
                RuleCode::Us22,
                vec!["@I123@".to_string()],
                "Individual ID is not unique",
            ),
            Violation::new(
                Category::Family,
                RuleCode::Us04,
                vec!["@F1@".to_string()],
                "Married after divorce",
            ),
        ];

        let json = serde_json::to_string(&violations).unwrap();
        let decoded: Vec<Violation> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, violations);
    }

    #[test]
    fn test_individual_serde_round_trip() {
        let mut individual = create_test_individual("@I1@", 1980, Gender::Female);
        individual.name = "Jane /Doe/".to_string();
        individual.children.add("@I2@");
        individual.add_sibling("@I3@");

        let json = serde_json::to_string(&individual).unwrap();
        let decoded: Individual = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, individual.id);
        assert_eq!(decoded.birth_date, individual.birth_date);
        assert_eq!(decoded.children, individual.children);
        assert_eq!(decoded.siblings, individual.siblings);
    }
}
