//! `<body>` marker tracking the mobile viewport class.

use crate::consts::MOBILE_DEVICE;
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};

#[derive(Debug, Clone, Default)]
pub struct DeviceMarker;

impl DeviceMarker {
    fn mark(ctx: &mut Ctx<'_>) {
        ctx.emit(Effect::toggle_class(Target::Body, MOBILE_DEVICE, ctx.viewport.is_mobile()));
    }
}

impl Controller for DeviceMarker {
    fn name(&self) -> &'static str {
        "device"
    }

    fn attach(&mut self, ctx: &mut Ctx<'_>) {
        Self::mark(ctx);
    }

    fn on_viewport(&mut self, ctx: &mut Ctx<'_>) {
        Self::mark(ctx);
    }
}
