// Demo driver: resolves every variant from the selection and prints what it produces.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use design_patterns::abstract_factory::furniture::furnish;
use design_patterns::abstract_factory::{shape_factory, Application};
use design_patterns::adapter::{RoundHole, RoundPeg, RoundPegLike, SquarePeg, SquarePegAdapter};
use design_patterns::bridge::{AdvancedRemote, BasicRemote, BridgedCircle, Remote};
use design_patterns::builder::{Builder, CarBuilder, Director, ManualBuilder, MealBuilder};
use design_patterns::composite::graphics::sample_scene;
use design_patterns::composite::{product_form, FormTree};
use design_patterns::{logging, Catalog, ConfigError, PatternError, Selection};

#[derive(Parser, Debug)]
#[command(name = "patterns", about = "Run the creational and structural pattern demos")]
struct Cli {
    /// Selection file (TOML or JSON); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Repeat for more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Demo {
    All,
    AbstractFactory,
    FactoryMethod,
    Builder,
    Adapter,
    Bridge,
    Composite,
}

type DemoFn = fn(&Selection, &Catalog) -> Result<Vec<String>, PatternError>;

const DEMOS: [(Demo, &str, DemoFn); 6] = [
    (Demo::AbstractFactory, "Abstract Factory", abstract_factory_demo),
    (Demo::FactoryMethod, "Factory Method", factory_method_demo),
    (Demo::Builder, "Builder", builder_demo),
    (Demo::Adapter, "Adapter", adapter_demo),
    (Demo::Bridge, "Bridge", bridge_demo),
    (Demo::Composite, "Composite", composite_demo),
];

// =============================================================================
// Creational
// =============================================================================

fn abstract_factory_demo(selection: &Selection, catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let mut lines = Vec::new();

    let toolkit = catalog.gui.resolve_set(selection.os())?;
    lines.extend(Application::new(toolkit.as_ref()).paint());

    let furniture = catalog.furniture.resolve_set(selection.furniture())?;
    lines.extend(furnish(furniture.as_ref()));

    let shapes = shape_factory(selection.rounded_shapes())?;
    for key in shapes.keys() {
        lines.push(shapes.resolve(key)?.draw());
    }
    Ok(lines)
}

fn factory_method_demo(selection: &Selection, catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let mut lines = catalog.dialogs.resolve(selection.dialog())?.render();
    for kind in selection.shape_kinds()? {
        lines.push(kind.build().draw());
    }
    Ok(lines)
}

fn builder_demo(selection: &Selection, _catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let recipe = selection.recipe()?;
    let director = Director;

    let mut cars = CarBuilder::new();
    director.construct(recipe, &mut cars);
    let car = cars.get_product();

    let mut manuals = ManualBuilder::new();
    director.construct(recipe, &mut manuals);
    let manual = manuals.get_product();

    let mut lines = vec![
        format!("{recipe} recipe: {}", car.describe()),
        format!("manual: {}", manual.describe()),
    ];
    lines.extend(MealBuilder::new()?.prepare(selection.meal_plan()?)?.lines());
    Ok(lines)
}

// =============================================================================
// Structural
// =============================================================================

fn adapter_demo(_selection: &Selection, _catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let hole = RoundHole::new(5.0);
    let round = RoundPeg::new(5.0);
    let small = SquarePegAdapter::new(SquarePeg::new(5.0));
    let large = SquarePegAdapter::new(SquarePeg::new(10.0));

    let pegs: [(&str, &dyn RoundPegLike); 3] = [
        ("round peg 5", &round),
        ("square peg 5", &small),
        ("square peg 10", &large),
    ];
    Ok(pegs
        .iter()
        .map(|(label, peg)| {
            format!(
                "{label} (radius {:.2}) fits hole {}: {}",
                peg.radius(),
                hole.radius(),
                hole.fits(*peg)
            )
        })
        .collect())
}

fn bridge_demo(selection: &Selection, catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let mut device = catalog.devices.resolve(selection.device())?;
    let mut lines = Vec::new();

    let mut basic = BasicRemote::new(device.as_mut());
    basic.power();
    lines.push(format!("basic remote: {}", basic.device().status()));

    let mut advanced = AdvancedRemote::new(device.as_mut());
    advanced.power();
    advanced.mute();
    lines.push(format!("advanced remote: {}", advanced.device().status()));

    let api = catalog.draw_apis.resolve(selection.circle_color())?;
    lines.push(BridgedCircle::new(100.0, 100.0, 10.0, api).draw());
    Ok(lines)
}

fn composite_demo(_selection: &Selection, _catalog: &Catalog) -> Result<Vec<String>, PatternError> {
    let (mut scene, all) = sample_scene()?;
    scene.move_by(all, 1, 2)?;
    let mut lines = scene.draw(all)?;

    let mut forms = FormTree::new();
    let form = product_form(&mut forms)?;
    forms.set_data(
        form,
        &serde_json::json!({
            "name": "Apple Macbook",
            "description": "A decent laptop.",
            "photo": { "caption": "Front Photo", "image": "photo1.png" }
        }),
    )?;
    lines.push(forms.render(form)?);
    Ok(lines)
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let selection = match &cli.config {
        Some(path) => Selection::from_path(path)?,
        None => Selection::default(),
    };
    let catalog = Catalog::builtin()?;
    selection.validate(&catalog)?;

    for (demo, title, run_demo) in DEMOS {
        if cli.demo != Demo::All && cli.demo != demo {
            continue;
        }
        println!("{}", format!("=== {title} ===").bold().cyan());
        for line in run_demo(&selection, &catalog)? {
            println!("{line}");
        }
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
