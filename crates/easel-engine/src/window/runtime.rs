use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, WindowId};

use crate::compositor::Graphics;
use crate::coords::Size2;
use crate::core::{Control, GameLoop};
use crate::device::GpuInit;
use crate::input::platform::translate_window_event;
use crate::input::{Event, InputTracker};

use super::{MonitorInfo, NativeWindow, WindowCommand, WindowIndex};

/// Drives a [`GameLoop`] against a [`Graphics`] registry until exit.
pub struct Runtime;

impl Runtime {
    /// Opens a platform window for every registered window and runs the loop.
    ///
    /// Returns once the game asks to exit or the last window closes. Window or
    /// GPU creation failures end the loop and are returned.
    pub fn run<G: GameLoop>(gpu_init: GpuInit, graphics: &mut Graphics, game: &mut G) -> Result<()> {
        anyhow::ensure!(!graphics.windows().is_empty(), "no windows registered");
        graphics.set_max_texture_dimension(gpu_init.required_limits.max_texture_dimension_2d);

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(gpu_init, graphics, game);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct RuntimeState<'a, G: GameLoop> {
    gpu_init: GpuInit,
    graphics: &'a mut Graphics,
    game: &'a mut G,

    ids: HashMap<WindowId, WindowIndex>,
    trackers: HashMap<WindowId, InputTracker>,
    closed: HashSet<WindowIndex>,

    /// Collected between frames, dispatched in order at the start of the next one.
    pending: Vec<Event>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<'a, G: GameLoop> RuntimeState<'a, G> {
    fn new(gpu_init: GpuInit, graphics: &'a mut Graphics, game: &'a mut G) -> Self {
        Self {
            gpu_init,
            graphics,
            game,
            ids: HashMap::new(),
            trackers: HashMap::new(),
            closed: HashSet::new(),
            pending: Vec::new(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.fatal = Some(error);
        self.exit_requested = true;
        event_loop.exit();
    }

    /// Creates native windows for registered windows that have none yet.
    fn open_windows(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();
        let infos: Vec<MonitorInfo> = monitors.iter().map(monitor_info).collect();

        for (i, window) in self.graphics.windows_mut().iter_mut().enumerate() {
            let index = WindowIndex(i);
            if window.native().is_some() || self.closed.contains(&index) {
                continue;
            }
            window.set_monitors(infos.clone());

            let dims = window.dimensions();
            let mut attrs = winit::window::Window::default_attributes()
                .with_title(window.title())
                .with_inner_size(LogicalSize::new(dims.w, dims.h));
            if window.is_fullscreen() {
                let monitor = monitors.get(window.monitor()).cloned();
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(monitor)));
            }

            let platform = event_loop
                .create_window(attrs)
                .with_context(|| format!("failed to create window {i} (\"{}\")", window.title()))?;
            let native = NativeWindow::create(platform, &self.gpu_init)
                .with_context(|| format!("GPU initialization failed for window {i}"))?;

            // The platform window was built from the current state.
            window.take_commands();

            let id = native.id();
            window.attach_native(native);
            self.ids.insert(id, index);
            self.trackers.insert(id, InputTracker::default());

            log::info!("window {i} opened ({}x{})", dims.w, dims.h);
        }
        Ok(())
    }

    fn close_window(&mut self, id: WindowId) {
        let Some(index) = self.ids.remove(&id) else { return };
        self.trackers.remove(&id);
        self.closed.insert(index);

        if let Ok(window) = self.graphics.window_mut(index) {
            drop(window.detach_native());
        }
        log::info!("window {} closed", index.0);

        if self.ids.is_empty() {
            self.pending.push(Event::Exit);
        }
    }

    fn handle_resize(&mut self, id: WindowId, index: WindowIndex, size: PhysicalSize<u32>) {
        let Ok(window) = self.graphics.window_mut(index) else { return };
        let Some(native) = window.native_mut() else { return };
        native.resize_surface(size);
        let scale = native.scale_factor();

        if size.width == 0 || size.height == 0 {
            self.pending.push(Event::Minimize);
            return;
        }

        let logical: LogicalSize<u32> = size.to_logical(scale);
        let dims = Size2::new(logical.width, logical.height);
        match self.graphics.apply_os_resize(index, dims) {
            Ok(true) => self.pending.push(Event::Resize {
                window: index,
                width: dims.w,
                height: dims.h,
            }),
            Ok(false) => {}
            Err(e) => log::warn!("resize of {id:?} ignored: {e}"),
        }
    }

    /// events → update → scroll cameras → late update → draw → present
    fn run_frame(&mut self) -> Result<Control> {
        let mut control = Control::Continue;
        for event in std::mem::take(&mut self.pending) {
            let exit = event == Event::Exit;
            control = control.and(self.game.on_event(self.graphics, &event));
            if exit {
                return Ok(Control::Exit);
            }
        }
        if control == Control::Exit {
            return Ok(control);
        }

        control = self.game.update(self.graphics);
        self.graphics.update();
        control = control.and(self.game.late_update(self.graphics));

        self.game.draw(self.graphics);
        self.graphics.draw().context("frame could not be drawn")?;
        self.graphics.flip();

        Ok(control)
    }

    fn apply_window_commands(&mut self, event_loop: &ActiveEventLoop) {
        let mut monitors: Option<Vec<MonitorHandle>> = None;

        for (i, window) in self.graphics.windows_mut().iter_mut().enumerate() {
            let commands = window.take_commands();
            if commands.is_empty() {
                continue;
            }
            let Some(native) = window.native() else { continue };
            let monitors = monitors.get_or_insert_with(|| event_loop.available_monitors().collect());

            native.with_winit(|w| {
                for command in commands {
                    match command {
                        WindowCommand::Resize { dimensions, monitor } => {
                            let _ = w.request_inner_size(LogicalSize::new(dimensions.w, dimensions.h));
                            match monitors.get(monitor) {
                                Some(target) if w.current_monitor().as_ref() != Some(target) => {
                                    w.set_outer_position(target.position());
                                }
                                Some(_) => {}
                                None => log::warn!("window {i}: monitor {monitor} does not exist"),
                            }
                        }
                        WindowCommand::Rename(title) => w.set_title(&title),
                        WindowCommand::SetFullscreen { fullscreen, monitor } => {
                            let mode = fullscreen
                                .then(|| Fullscreen::Borderless(monitors.get(monitor).cloned()));
                            w.set_fullscreen(mode);
                        }
                    }
                }
            });

            let infos = monitors.iter().map(monitor_info).collect();
            window.set_monitors(infos);
        }
    }
}

impl<G: GameLoop> ApplicationHandler for RuntimeState<'_, G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.ids.is_empty() {
            return;
        }
        if let Err(e) = self.open_windows(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        let Some(&index) = self.ids.get(&window_id) else { return };

        match &event {
            WindowEvent::CloseRequested => self.close_window(window_id),

            WindowEvent::Resized(size) => self.handle_resize(window_id, index, *size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self
                    .graphics
                    .window(index)
                    .ok()
                    .and_then(|w| w.native())
                    .map(|n| n.with_winit(|w| w.inner_size()));
                if let Some(size) = size {
                    self.handle_resize(window_id, index, size);
                }
            }

            _ => {
                let (graphics, trackers) = (&*self.graphics, &mut self.trackers);
                let Ok(window) = graphics.window(index) else { return };
                let Some(native) = window.native() else { return };
                let tracker = trackers.entry(window_id).or_default();

                if let Some(ev) = native.with_winit(|w| translate_window_event(w, tracker, &event)) {
                    self.pending.push(ev);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        if self.ids.is_empty() && self.pending.is_empty() {
            // Not resumed yet.
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);

        match self.run_frame() {
            Ok(Control::Continue) if !self.ids.is_empty() => {}
            Ok(_) => {
                log::info!("exit requested");
                self.exit_requested = true;
                event_loop.exit();
                return;
            }
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        self.apply_window_commands(event_loop);

        if let Err(e) = self.open_windows(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GPU contexts go before the event loop does.
        for window in self.graphics.windows_mut() {
            drop(window.detach_native());
        }
    }
}

fn monitor_info(handle: &MonitorHandle) -> MonitorInfo {
    let size: LogicalSize<u32> = handle.size().to_logical(handle.scale_factor());
    MonitorInfo {
        name: handle.name(),
        size: Size2::new(size.width, size.height),
    }
}
