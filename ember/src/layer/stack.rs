use crate::event::Event;
use crate::layer::Layer;

/// Layers in draw order, with overlays always above regular layers.
///
/// Updates run bottom to top. Events run top to bottom and stop at the first layer that leaves
/// the event consumed.
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
    overlay_start: usize,
}

impl LayerStack {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            overlay_start: 0,
        }
    }

    pub fn push_layer(&mut self, layer: Box<dyn Layer>) -> Result<(), String> {
        let index = self.overlay_start;
        self.insert("LayerStack::push_layer", index, layer)?;
        self.overlay_start += 1;
        Ok(())
    }

    pub fn push_overlay(&mut self, layer: Box<dyn Layer>) -> Result<(), String> {
        let index = self.layers.len();
        self.insert("LayerStack::push_overlay", index, layer)
    }

    pub fn pop_layer(&mut self, name: &str) -> Result<Box<dyn Layer>, String> {
        match self.position(name) {
            Some(index) if index < self.overlay_start => {
                self.overlay_start -= 1;
                Ok(self.detach(index))
            },
            Some(_) => Err(format!("LayerStack::pop_layer: \"{}\" is an overlay", name)),
            None => Err(format!("LayerStack::pop_layer: layer \"{}\" does not exist", name)),
        }
    }

    pub fn pop_overlay(&mut self, name: &str) -> Result<Box<dyn Layer>, String> {
        match self.position(name) {
            Some(index) if index >= self.overlay_start => Ok(self.detach(index)),
            Some(_) => Err(format!("LayerStack::pop_overlay: \"{}\" is not an overlay", name)),
            None => Err(format!("LayerStack::pop_overlay: overlay \"{}\" does not exist", name)),
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Layer, String> {
        if let Some(index) = self.position(name) {
            Ok(self.layers[index].as_ref())
        } else {
            Err(format!("LayerStack::get: layer \"{}\" does not exist", name))
        }
    }

    /// Looks a layer up by name and downcasts it to its concrete type.
    pub fn get_as<T: Layer + 'static>(&self, name: &str) -> Result<&T, String> {
        self.get(name)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| format!("LayerStack::get_as: layer \"{}\" has a different type", name))
    }

    pub fn get_as_mut<T: Layer + 'static>(&mut self, name: &str) -> Result<&mut T, String> {
        let index = self.position(name)
            .ok_or_else(|| format!("LayerStack::get_as_mut: layer \"{}\" does not exist", name))?;

        self.layers[index]
            .as_mut()
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| format!("LayerStack::get_as_mut: layer \"{}\" has a different type", name))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Names from bottom to top.
    pub fn get_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.get_name()).collect()
    }

    pub fn on_update(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.on_update();
        }
    }

    /// Offers `event` to each layer from the top down. Returns whether it ended up consumed.
    ///
    /// An event that arrives already consumed is not offered to any layer.
    pub fn on_event(&mut self, event: &mut dyn Event) -> bool {
        if event.is_consumed() {
            log!("LayerStack: {} arrived consumed, skipping layers", event);
            return true;
        }

        for layer in self.layers.iter_mut().rev() {
            layer.on_event(event);

            if event.is_consumed() {
                log!("LayerStack: {} consumed by \"{}\"", event, layer.get_name());
                return true;
            }
        }

        false
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.get_name() == name)
    }

    fn insert(&mut self, operation: &str, index: usize, mut layer: Box<dyn Layer>) -> Result<(), String> {
        let name = layer.get_name();

        if self.position(&name).is_some() {
            return Err(format!("{}: layer \"{}\" already exists", operation, name));
        }

        log!("LayerStack: attaching \"{}\"", name);
        layer.on_attach();
        self.layers.insert(index, layer);

        Ok(())
    }

    fn detach(&mut self, index: usize) -> Box<dyn Layer> {
        let mut layer = self.layers.remove(index);
        log!("LayerStack: detaching \"{}\"", layer.get_name());
        layer.on_detach();
        layer
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        while !self.layers.is_empty() {
            self.detach(self.layers.len() - 1);
        }
    }
}
