mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use payment_reports::{
    CompanyFilter, PaymentReportsClientV1, PaymentReportsConfig, PaymentReportsLocalClient,
};
use serde_json::Value;

/// Payment Reports - read-only reporting over users, companies and payments
#[derive(Parser)]
#[command(name = "payment-reports")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    report: Option<Report>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Report {
    /// All users
    Users,
    /// Users with the given first name
    UsersByFirstName { first_name: String },
    /// The oldest users, ascending by birth date
    OldestUsers {
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Users of a company
    UsersByCompany { company: String },
    /// Payments received by users of a company
    PaymentsByCompany { company: String },
    /// Mean payment received by a user
    AveragePayment { first_name: String, last_name: String },
    /// Mean payment per company
    CompanyAverages,
    /// Users whose mean payment beats the global mean
    AboveAveragePayers,
    /// Smallest and largest payment per last name
    PaymentRanges,
    /// Longest combined first and last name
    MaxNameLength,
    /// Birth dates of users, optionally restricted to one company
    Birthdays {
        #[arg(long)]
        company: Option<String>,
    },
    /// Number of users per company
    UserCounts,
    /// Total payments per company
    PaymentSums,
}

async fn run_report(client: &dyn PaymentReportsClientV1, report: &Report) -> Result<Value> {
    let value = match report {
        Report::Users => serde_json::to_value(client.list_all_users().await?)?,
        Report::UsersByFirstName { first_name } => {
            serde_json::to_value(client.list_users_by_first_name(first_name).await?)?
        }
        Report::OldestUsers { limit } => {
            serde_json::to_value(client.list_users_ordered_by_birthday(*limit).await?)?
        }
        Report::UsersByCompany { company } => {
            serde_json::to_value(client.list_users_by_company_name(company).await?)?
        }
        Report::PaymentsByCompany { company } => {
            serde_json::to_value(client.list_payments_by_company_name(company).await?)?
        }
        Report::AveragePayment {
            first_name,
            last_name,
        } => serde_json::to_value(client.average_payment_amount(first_name, last_name).await?)?,
        Report::CompanyAverages => serde_json::to_value(client.company_averages().await?)?,
        Report::AboveAveragePayers => serde_json::to_value(client.above_average_payers().await?)?,
        Report::PaymentRanges => {
            serde_json::to_value(client.min_max_payments_by_last_name().await?)?
        }
        Report::MaxNameLength => serde_json::to_value(client.max_full_name_length().await?)?,
        Report::Birthdays { company } => {
            let filter = CompanyFilter {
                name: company.clone(),
            };
            serde_json::to_value(client.birthdays_by_company_filter(&filter).await?)?
        }
        Report::UserCounts => serde_json::to_value(client.user_count_by_company().await?)?,
        Report::PaymentSums => serde_json::to_value(client.payment_sum_by_company().await?)?,
    };
    Ok(value)
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = PaymentReportsConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", render(&serde_json::to_value(&config)?, true)?);
        return Ok(());
    }

    let Some(report) = cli.report else {
        anyhow::bail!("no report requested, see --help");
    };

    let client = PaymentReportsLocalClient::connect(&config)
        .await
        .context("failed to connect to database")?;

    tracing::info!(?report, "Running report");
    let value = run_report(&client, &report)
        .await
        .with_context(|| format!("report {report:?} failed"))?;
    println!("{}", render(&value, cli.pretty)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use payment_reports::{
        Birthday, CompanyAverage, CompanyPaymentSum, CompanyUserCount, LastNamePaymentRange,
        PayerAverage, Payment, PaymentReportsError, User,
    };

    /// Client that only knows company sums and rejects everything else.
    struct FixedClient;

    #[async_trait]
    impl PaymentReportsClientV1 for FixedClient {
        async fn list_all_users(&self) -> Result<Vec<User>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn list_users_by_first_name(&self, _: &str) -> Result<Vec<User>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn list_users_ordered_by_birthday(
            &self,
            limit: i64,
        ) -> Result<Vec<User>, PaymentReportsError> {
            Err(PaymentReportsError::invalid_argument(format!(
                "limit: must be positive, got {limit}"
            )))
        }
        async fn list_users_by_company_name(
            &self,
            _: &str,
        ) -> Result<Vec<User>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn list_payments_by_company_name(
            &self,
            _: &str,
        ) -> Result<Vec<Payment>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn average_payment_amount(&self, _: &str, _: &str) -> Result<f64, PaymentReportsError> {
            Err(PaymentReportsError::no_data("average_payment_amount"))
        }
        async fn company_averages(&self) -> Result<Vec<CompanyAverage>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn above_average_payers(&self) -> Result<Vec<PayerAverage>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn min_max_payments_by_last_name(
            &self,
        ) -> Result<Vec<LastNamePaymentRange>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn max_full_name_length(&self) -> Result<i32, PaymentReportsError> {
            Ok(11)
        }
        async fn birthdays_by_company_filter(
            &self,
            filter: &CompanyFilter,
        ) -> Result<Vec<Birthday>, PaymentReportsError> {
            assert_eq!(filter.name(), Some("Google"));
            Ok(Vec::new())
        }
        async fn user_count_by_company(
            &self,
        ) -> Result<Vec<CompanyUserCount>, PaymentReportsError> {
            Ok(Vec::new())
        }
        async fn payment_sum_by_company(
            &self,
        ) -> Result<Vec<CompanyPaymentSum>, PaymentReportsError> {
            Ok(vec![CompanyPaymentSum {
                company_name: "Apple".to_owned(),
                total_amount: 2050,
            }])
        }
    }

    #[test]
    fn parses_report_subcommands() {
        let cli = Cli::try_parse_from(["payment-reports", "-vv", "oldest-users", "--limit", "3"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.report, Some(Report::OldestUsers { limit: 3 }));

        let cli = Cli::try_parse_from([
            "payment-reports",
            "average-payment",
            "Bill",
            "Gates",
        ])
        .unwrap();
        assert_eq!(
            cli.report,
            Some(Report::AveragePayment {
                first_name: "Bill".to_owned(),
                last_name: "Gates".to_owned()
            })
        );
    }

    #[test]
    fn negative_limit_reaches_the_service() {
        let cli =
            Cli::try_parse_from(["payment-reports", "oldest-users", "--limit", "-1"]).unwrap();
        assert_eq!(cli.report, Some(Report::OldestUsers { limit: -1 }));
    }

    #[tokio::test]
    async fn report_is_rendered_as_json() {
        let value = run_report(&FixedClient, &Report::PaymentSums).await.unwrap();
        assert_eq!(
            render(&value, false).unwrap(),
            r#"[{"company_name":"Apple","total_amount":2050}]"#
        );

        let value = run_report(&FixedClient, &Report::MaxNameLength).await.unwrap();
        assert_eq!(value, serde_json::json!(11));
    }

    #[tokio::test]
    async fn birthdays_forward_company_filter() {
        let report = Report::Birthdays {
            company: Some("Google".to_owned()),
        };
        let value = run_report(&FixedClient, &report).await.unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn client_errors_propagate() {
        let err = run_report(&FixedClient, &Report::OldestUsers { limit: 0 })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let err = run_report(
            &FixedClient,
            &Report::AveragePayment {
                first_name: "Bill".to_owned(),
                last_name: "Jobs".to_owned(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("No data"));
    }
}
