use super::Database;
use crate::errors::AppResult;
use crate::models::{Category, EmailAttributes, NewFile, ProductionRequest, Sentiment};
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Controls for the mock-data seeder. The core never depends on this module;
/// it only runs when [`Database::new`] finds an empty catalog.
#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    /// Fixes the generator for reproducible catalogs; entropy-seeded when
    /// absent.
    pub rng_seed: Option<u64>,
}

const TOPICS: &[&str] = &[
    "Project Update",
    "Meeting Request",
    "Contract Review",
    "Budget Approval",
    "Status Report",
    "Client Communication",
    "Legal Matter",
    "Invoice",
    "Proposal",
    "Follow-up",
    "Urgent Action",
    "Documentation",
];

const INTERNAL_ADDRESSES: &[&str] = &[
    "john.doe@company.com",
    "jane.smith@company.com",
    "bob.jones@company.com",
    "alice.brown@company.com",
    "charlie.wilson@company.com",
    "diana.miller@company.com",
];

const EXTERNAL_ADDRESSES: &[&str] = &[
    "client1@external.com",
    "vendor@supplier.com",
    "partner@business.com",
    "customer@client.com",
    "consultant@firm.com",
    "lawyer@legal.com",
];

const DIRECTORIES: &[(&str, Category)] = &[
    ("Email_Folder_2022", Category::Email),
    ("Email_Folder_2023", Category::Email),
    ("Email_Folder_2024", Category::Email),
    ("Claim_Documents_2022", Category::Claim),
    ("Claim_Documents_2023", Category::Claim),
    ("Claim_Documents_2024", Category::Claim),
    ("Claim_Evidence_2023", Category::Claim),
    ("Other_Documents", Category::Other),
    ("Misc_Files", Category::Other),
    ("Archive_2022", Category::Other),
];

impl Database {
    /// Populates an empty catalog with weighted mock data spanning 2022-2024
    /// plus a handful of production requests. Returns the number of files
    /// written.
    pub fn seed_mock_data(&self, options: &SeedOptions) -> AppResult<usize> {
        let mut rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let base_date = Utc
            .with_ymd_and_hms(2022, 1, 1, 0, 0, 0)
            .single()
            .expect("valid seed start date");
        let end_date = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .single()
            .expect("valid seed end date");
        let span_days = (end_date - base_date).num_days();

        let mut known_hashes: Vec<String> = Vec::new();
        let mut file_count = 0usize;

        for (directory, category) in DIRECTORIES {
            let files_in_dir = rng.random_range(50..=150);
            for _ in 0..files_in_dir {
                let date = base_date + Duration::days(rng.random_range(0..span_days));
                let file_name = format!("file_{}_{}.pdf", file_count, rng.random_range(0..10_000));

                // Privilege review only flags emails, roughly one in five.
                let privileged = *category == Category::Email && rng.random_bool(0.2);

                // About one file in ten shares content with an earlier one.
                let duplicate_hash = if !known_hashes.is_empty() && rng.random_bool(0.1) {
                    known_hashes[rng.random_range(0..known_hashes.len())].clone()
                } else {
                    let hash = format!("hash_{}_{}", file_count, rng.random_range(0..1_000_000));
                    known_hashes.push(hash.clone());
                    hash
                };

                let size = rng.random_range(1_024..10 * 1_024 * 1_024);

                let email = (*category == Category::Email)
                    .then(|| random_email_attributes(&mut rng, file_count));

                self.insert_file(&NewFile {
                    path: format!("{directory}/{file_name}"),
                    directory: directory.to_string(),
                    category: *category,
                    date,
                    size,
                    privileged,
                    duplicate_hash: Some(duplicate_hash),
                    file_name,
                    email,
                })?;
                file_count += 1;
            }
        }

        for (id, title, description) in [
            ("PR-001", "Production Request #1", "Email communication timeline"),
            ("PR-002", "Production Request #2", "Claims-related communications"),
            ("PR-003", "Production Request #3", "Document review"),
            ("PR-004", "Production Request #4", "Evidence compilation"),
            ("PR-005", "Production Request #5", "Correspondence analysis"),
        ] {
            self.upsert_production_request(&ProductionRequest {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })?;
        }

        Ok(file_count)
    }
}

fn random_email_attributes(rng: &mut StdRng, file_count: usize) -> EmailAttributes {
    let topic = TOPICS[rng.random_range(0..TOPICS.len())].to_string();
    let subject = format!("{topic} - Email {file_count}");

    // Roughly 70% of traffic stays inside the organization.
    let is_internal = rng.random_bool(0.7);
    let (from_address, to_address) = if is_internal {
        let from = INTERNAL_ADDRESSES[rng.random_range(0..INTERNAL_ADDRESSES.len())];
        let mut to = INTERNAL_ADDRESSES[rng.random_range(0..INTERNAL_ADDRESSES.len())];
        while to == from {
            to = INTERNAL_ADDRESSES[rng.random_range(0..INTERNAL_ADDRESSES.len())];
        }
        (from.to_string(), to.to_string())
    } else if rng.random_bool(0.5) {
        (
            INTERNAL_ADDRESSES[rng.random_range(0..INTERNAL_ADDRESSES.len())].to_string(),
            EXTERNAL_ADDRESSES[rng.random_range(0..EXTERNAL_ADDRESSES.len())].to_string(),
        )
    } else {
        (
            EXTERNAL_ADDRESSES[rng.random_range(0..EXTERNAL_ADDRESSES.len())].to_string(),
            INTERNAL_ADDRESSES[rng.random_range(0..INTERNAL_ADDRESSES.len())].to_string(),
        )
    };

    // 40% neutral, 30% positive, 20% negative, 10% unknown.
    let sentiment = match rng.random::<f32>() {
        draw if draw < 0.4 => Sentiment::Neutral,
        draw if draw < 0.7 => Sentiment::Positive,
        draw if draw < 0.9 => Sentiment::Negative,
        _ => Sentiment::Unknown,
    };

    EmailAttributes {
        subject,
        from_address,
        to_address,
        sentiment,
        is_internal,
        topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterSpec;

    #[test]
    fn seeding_fills_an_empty_catalog_with_valid_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Database::open(&dir.path().join("catalog.db")).expect("db");

        let seeded = db
            .seed_mock_data(&SeedOptions { rng_seed: Some(7) })
            .expect("seed");
        assert!(seeded >= 500, "ten directories of 50-150 files each");
        assert_eq!(db.record_count().expect("count"), seeded as i64);

        let topics = db.list_topics().expect("topics");
        assert!(!topics.is_empty());
        assert!(topics.iter().all(|topic| TOPICS.contains(&topic.as_str())));

        let people = db.list_people().expect("people");
        assert!(!people.internal.is_empty());

        let requests = db.list_production_requests().expect("requests");
        assert_eq!(requests.len(), 5);
        assert_eq!(requests[0].id, "PR-001");
    }

    #[test]
    fn seeded_non_email_rows_carry_no_email_attributes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Database::open(&dir.path().join("catalog.db")).expect("db");
        db.seed_mock_data(&SeedOptions { rng_seed: Some(11) })
            .expect("seed");

        let spec = FilterSpec {
            categories: vec![Category::Claim, Category::Other],
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 1_000).expect("search");
        assert!(!result.files.is_empty());
        assert!(result.files.iter().all(|file| file.email.is_none()));
    }

    #[test]
    fn fixed_seed_produces_identical_catalogs() {
        let dir = tempfile::tempdir().expect("tempdir");

        let first = Database::open(&dir.path().join("a.db")).expect("db");
        let second = Database::open(&dir.path().join("b.db")).expect("db");
        let options = SeedOptions { rng_seed: Some(42) };
        let seeded_first = first.seed_mock_data(&options).expect("seed");
        let seeded_second = second.seed_mock_data(&options).expect("seed");

        assert_eq!(seeded_first, seeded_second);
        assert_eq!(
            first.category_counts().expect("counts"),
            second.category_counts().expect("counts")
        );
    }
}
