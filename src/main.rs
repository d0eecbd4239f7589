use anyhow::Result;
use clap::{Parser, Subcommand};
use faqx::faq::search::{POPULAR_EXPANDED_LIMIT, POPULAR_LIMIT, RELATED_LIMIT};
use faqx::faq::{self, CategoryFilter, FaqSearchIndex};
use faqx::{output, testimonials};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "faqx")]
#[command(about = "Terminal-first FAQ search and testimonial engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Category filter: "all" or a category name
    #[arg(short, long, default_value = "all")]
    category: String,

    /// FAQ dataset file (defaults to the bundled dataset)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit search results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show popular questions sampled across categories
    Popular {
        /// Show the expanded list
        #[arg(short, long)]
        expanded: bool,
    },
    /// Show questions related to the first question matching TEXT
    Related {
        /// Text identifying the origin question
        text: String,
    },
    /// List the categories present in the dataset
    Categories,
    /// Show client testimonials
    Testimonials {
        /// Shuffle the presentation order
        #[arg(short, long)]
        shuffle: bool,

        /// Maximum testimonials to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Testimonial dataset file (defaults to the bundled dataset)
        #[arg(long)]
        testimonial_data: Option<PathBuf>,
    },
    /// Browse the FAQ interactively
    #[cfg(feature = "interactive")]
    Browse,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Some(Commands::Popular { expanded }) => {
            let index = load_index(&cli.data)?;
            let limit = if expanded {
                POPULAR_EXPANDED_LIMIT
            } else {
                POPULAR_LIMIT
            };
            output::print_question_list(&index.popular(limit), color)?;
        }

        Some(Commands::Related { text }) => {
            let index = load_index(&cli.data)?;
            let matches = index.filter(&text, &CategoryFilter::All);
            match matches.first() {
                Some(origin) => {
                    println!("Related to: {}", origin.question);
                    let related = index.related(origin.id, RELATED_LIMIT);
                    if related.is_empty() {
                        println!("No related questions in the {} category", origin.category);
                    } else {
                        output::print_question_list(&related, color)?;
                    }
                }
                None => {
                    println!("No question matching '{}'", text);
                }
            }
        }

        Some(Commands::Categories) => {
            let index = load_index(&cli.data)?;
            for category in index.categories() {
                println!("{}", category);
            }
        }

        Some(Commands::Testimonials {
            shuffle,
            limit,
            testimonial_data,
        }) => {
            let lists = match &testimonial_data {
                Some(path) => testimonials::load_testimonials(path)?,
                None => testimonials::bundled_testimonials()?,
            };
            let mut merged = testimonials::dedupe(lists);
            if shuffle {
                merged = testimonials::shuffle(&merged);
            }
            if let Some(limit) = limit {
                merged.truncate(limit);
            }
            output::print_testimonials(&merged, color)?;
        }

        #[cfg(feature = "interactive")]
        Some(Commands::Browse) => {
            faqx::tui::run(load_index(&cli.data)?)?;
        }

        None => {
            if cli.query.is_empty() {
                #[cfg(feature = "interactive")]
                {
                    faqx::tui::run(load_index(&cli.data)?)?;
                }
                #[cfg(not(feature = "interactive"))]
                {
                    use clap::CommandFactory;
                    Cli::command().print_help()?;
                }
            } else {
                let index = load_index(&cli.data)?;
                let query = cli.query.join(" ");
                let results = index.filter(&query, &CategoryFilter::parse(&cli.category));

                if cli.json {
                    serde_json::to_writer_pretty(std::io::stdout(), &results)?;
                    println!();
                } else if results.is_empty() {
                    println!("No matches for '{}'", query);
                } else {
                    output::print_faq_matches(&results, &query, color)?;
                }
            }
        }
    }

    Ok(())
}

fn load_index(data: &Option<PathBuf>) -> Result<FaqSearchIndex> {
    let entries = match data {
        Some(path) => faq::load_faq(path)?,
        None => faq::bundled_faq()?,
    };
    Ok(FaqSearchIndex::new(entries))
}
