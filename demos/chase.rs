//! Headless chase-cam demo: a camera follows a wandering drone using a
//! quarter-second half-life, stepped at a fixed update rate. Run with
//! `cargo run --example chase`.

use dampen::prelude::*;
use log::{info, LevelFilter};
use rand::Rng;

const FPS: u32 = 60;
const TIMESTEP: f32 = 1. / FPS as f32;
const RUN_SECONDS: u32 = 8;

struct Chase {
    cam: Vec3,
    drone: Vec3,
    heading: Vec3,
    ticks: u32,
}

impl Chase {
    fn new() -> Self {
        Self {
            cam: Vec3::ZERO,
            drone: vec3(6., 0., 2.),
            heading: Vec3::ZERO,
            ticks: 0,
        }
    }

    fn update(&mut self) {
        let mut rng = rand::thread_rng();

        // Pick a new heading every couple of seconds on average
        if rng.gen_ratio(1, FPS * 2) {
            self.heading = vec3(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
        }
        self.drone += self.heading * 2. * TIMESTEP;

        self.cam = smooth_half_life_vec3(self.cam, self.drone, 0.25, TIMESTEP);
        self.ticks += 1;
    }
}

fn main() {
    env_logger::Builder::new()
        .filter(None, LevelFilter::Info)
        .init();

    game_loop::game_loop(
        Chase::new(),
        FPS,
        0.1,
        |g| {
            g.game.update();

            if g.game.ticks % FPS == 0 {
                let (drone, cam) = (g.game.drone, g.game.cam);
                info!(
                    "drone ({:6.2} {:6.2} {:6.2})  cam ({:6.2} {:6.2} {:6.2})  gap {:.3}",
                    drone.x,
                    drone.y,
                    drone.z,
                    cam.x,
                    cam.y,
                    cam.z,
                    drone.distance(cam)
                );
            }

            if g.game.ticks >= FPS * RUN_SECONDS {
                g.exit();
            }
        },
        |_g| {},
    );
}
