//! corridor — smallest demo for the rust_mapf planning core.
//!
//! Assigns four corridor agents to goals with both strategies, then walks a
//! three-node constraint fork tree the way a conflict-resolving search
//! would, printing what each branch can and cannot see.

mod scenario;

use anyhow::Result;

use mapf_assign::{GoalAssigner, GreedyAssigner, HungarianAssigner};
use mapf_constraint::ConstraintStore;
use mapf_core::{Agent, GridPos, Timestep};

use scenario::{corridor, random, Scenario};

// ── Constants ─────────────────────────────────────────────────────────────────

const RANDOM_AGENTS:    usize = 64;
const RANDOM_GRID_SIZE: i32   = 100;
const SEED:             u64   = 42;

fn total_cost(agents: &[Agent]) -> u64 {
    agents.iter().map(Agent::sq_travel_dist).sum()
}

// ── Assignment demo ───────────────────────────────────────────────────────────

fn run_assignment(label: &str, sc: &Scenario) -> Result<Vec<Agent>> {
    let exact = HungarianAssigner.assign(&sc.starts, &sc.goals)?;
    let greedy = GreedyAssigner.assign(&sc.starts, &sc.goals)?;

    println!("── {label}: {} agents ──", sc.starts.len());
    println!("  exact  total squared cost: {}", total_cost(&exact));
    println!("  greedy total squared cost: {}", total_cost(&greedy));
    if sc.starts.len() <= 8 {
        for agent in &exact {
            println!("    {agent}");
        }
    }
    println!();

    Ok(exact)
}

// ── Constraint-branching demo ─────────────────────────────────────────────────

fn run_branching(agents: &[Agent]) -> Result<()> {
    let a = agents[0].id;
    let b = agents[1].id;
    let contested = GridPos::new(5, 1);

    // Root of a conflict-resolution tree: nobody restricted yet.  Suppose
    // agents a and b would both occupy `contested` during [3, 5) — branch
    // once per agent, forbidding the cell to one of them in each child.
    let root = ConstraintStore::new();
    let keep_b_out = root.fork(b, contested, Timestep(3), Timestep(5))?;
    let keep_a_out = root.fork(a, contested, Timestep(3), Timestep(5))?;

    println!("── constraint branching at {contested}, interval [3, 5) ──");
    for (name, store) in [
        ("root        ", &root),
        ("left branch ", &keep_b_out),
        ("right branch", &keep_a_out),
    ] {
        println!(
            "  {name}: {} restrictions | {a} blocked@t3: {:5} | {b} blocked@t3: {}",
            store.restriction_count(),
            store.is_blocked(a, Timestep(3), contested),
            store.is_blocked(b, Timestep(3), contested),
        );
    }

    // Deepen one branch: the left child picks up a second restriction while
    // its sibling and the root stay exactly as they were.
    let deeper = keep_b_out.fork(a, GridPos::new(6, 1), Timestep(4), Timestep(6))?;
    println!(
        "  deepened left child: {} restrictions (sibling still {}, root still {})",
        deeper.restriction_count(),
        keep_a_out.restriction_count(),
        root.restriction_count(),
    );
    println!();

    Ok(())
}

fn main() -> Result<()> {
    let exact = run_assignment("corridor", &corridor())?;
    run_branching(&exact)?;

    run_assignment(
        "random scatter",
        &random(RANDOM_AGENTS, RANDOM_GRID_SIZE, SEED),
    )?;

    Ok(())
}
