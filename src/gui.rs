use glium::glutin::dpi::LogicalSize;
use glium::glutin::event::{Event, StartCause, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::WindowBuilder;
use glium::glutin::ContextBuilder;
use lazy_static::lazy_static;
use log::info;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::CONFIG;
use crate::game::Game;
use crate::render;

lazy_static! {
    static ref EVENT_LOOP: SendWrapper<RefCell<Option<EventLoop<()>>>> =
        SendWrapper::new(RefCell::new(Some(EventLoop::new())));
    pub static ref DISPLAY: SendWrapper<glium::Display> = SendWrapper::new({
        let (w, h) = CONFIG.window_size();
        let wb = WindowBuilder::new()
            .with_title(crate::TITLE.to_owned())
            .with_inner_size(LogicalSize::new(w, h));
        let cb = ContextBuilder::new().with_vsync(true);
        glium::Display::new(wb, cb, EVENT_LOOP.borrow().as_ref().unwrap())
            .expect("Failed to initialize display")
    });
}

pub fn show_gui(mut game: Game) -> ! {
    let display = &**DISPLAY;

    let mut events_buffer = VecDeque::new();
    let mut last_status = String::new();

    // Main loop.
    let mut next_frame_time = Instant::now();
    let ev_loop = EVENT_LOOP.borrow_mut().take().unwrap();
    ev_loop.run(move |event, _ev_loop, control_flow| {
        // Handle events.
        let mut now = Instant::now();
        let mut do_frame = false;
        match event.to_static() {
            Some(Event::NewEvents(cause)) => match cause {
                StartCause::ResumeTimeReached {
                    start: _,
                    requested_resume,
                } => {
                    now = requested_resume;
                    do_frame = true;
                }
                StartCause::Init => {
                    next_frame_time = now;
                    do_frame = true;
                }
                _ => (),
            },

            // The program is about to exit.
            Some(Event::LoopDestroyed) => info!("Exiting"),

            // Queue the event to be handled next time we render
            // everything.
            Some(ev) => events_buffer.push_back(ev),

            // Ignore this event.
            None => (),
        }

        if do_frame && next_frame_time <= now {
            let frame_duration = Duration::from_secs_f64(1.0 / 60.0);

            next_frame_time = now + frame_duration;
            if next_frame_time < Instant::now() {
                // Skip a frame (or several).
                next_frame_time = Instant::now() + frame_duration;
            }
            *control_flow = ControlFlow::WaitUntil(next_frame_time);

            for ev in events_buffer.drain(..) {
                if let Event::WindowEvent { event, .. } = ev {
                    match event {
                        // Handle window close event.
                        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                        // Handle everything else.
                        event => game.handle_event(event),
                    }
                }
            }

            // Show progress in the title bar.
            let status = game.status_text();
            if status != last_status {
                display
                    .gl_window()
                    .window()
                    .set_title(&format!("{} - {}", crate::TITLE, status));
                last_status = status;
            }

            // Draw everything.
            let mut target = display.draw();
            render::draw_board(&mut target, &game.board, &mut game.layout);
            target.finish().expect("Failed to swap buffers");
        }
    })
}
