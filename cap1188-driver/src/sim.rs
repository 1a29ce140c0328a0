//! Simulated CAP1188 for host tests
//!
//! [`Sim`] owns a 256-byte register file and a journal. The bus, pin and
//! delay handles it hands out all share that state, so a test can drive
//! the driver through either transport and then inspect both the raw wire
//! traffic ([`Event`]) and the decoded register accesses ([`Access`]).

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use cap1188_hal::{DelayMs, I2cBus, OutputPin, SpiBus};
use cap1188_protocol::command::Command;
use cap1188_protocol::registers::recalibration;
use cap1188_protocol::Register;

/// Pin number of the simulated chip-select line
pub const CS_PIN: u8 = 5;

/// Pin number of the simulated reset line
pub const RESET_PIN: u8 = 3;

/// Injected bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Raw activity seen on the simulated wires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PinHigh(u8),
    PinLow(u8),
    DelayMs(u32),
    I2cWrite { address: u8, data: Vec<u8> },
    I2cWriteRead { address: u8, write: Vec<u8>, read_len: usize },
    SpiWrite(Vec<u8>),
    SpiRead(usize),
}

/// Register access as the device decoded it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

struct State {
    registers: [u8; 256],
    pointer: u8,
    selected: bool,
    frame: Vec<u8>,
    events: Vec<Event>,
    accesses: Vec<Access>,
    interface_resets: u32,
    fail_next: bool,
}

impl State {
    fn take_failure(&mut self) -> Result<(), BusFault> {
        if self.fail_next {
            self.fail_next = false;
            return Err(BusFault);
        }
        Ok(())
    }

    fn read(&mut self, register: u8) -> u8 {
        self.accesses.push(Access::Read(register));
        self.registers[register as usize]
    }

    fn write(&mut self, register: u8, value: u8) {
        self.accesses.push(Access::Write(register, value));
        self.registers[register as usize] = value;

        let broadcast = self.registers[Register::RecalibrationConfig as usize]
            & recalibration::BUT_LD_TH
            != 0;
        if register == Register::SensorInput1Threshold as u8 && broadcast {
            let first = Register::SensorInput1Threshold as usize;
            let last = Register::SensorInput8Threshold as usize;
            self.registers[first..=last].fill(value);
        }
    }

    /// Decode a completed SPI frame on chip-select release
    fn end_frame(&mut self) {
        let frame = core::mem::take(&mut self.frame);
        match frame.as_slice() {
            [cmd, register] if *cmd == Command::SetAddress as u8 => self.pointer = *register,
            [cmd, value] if *cmd == Command::Write as u8 => self.write(self.pointer, *value),
            [a, b] if *a == Command::ResetInterface as u8 && *b == Command::ResetInterface as u8 => {
                self.interface_resets += 1
            }
            _ => {}
        }
    }
}

/// Handle to the simulated device
#[derive(Clone)]
pub struct Sim {
    state: Rc<RefCell<State>>,
}

impl Sim {
    /// Device with power-on register defaults
    pub fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[Register::AveragingSamplingConfig as usize] = 0x39;
        registers[Register::MultipleTouchConfig as usize] = 0x80;
        registers[Register::RecalibrationConfig as usize] = 0x8A;
        for reg in 0x30..=0x37 {
            registers[reg] = 0x40;
        }
        registers[Register::StandbyConfig as usize] = 0x39;
        registers[Register::ProductId as usize] = 0x50;
        registers[Register::ManufacturerId as usize] = 0x5D;
        registers[Register::Revision as usize] = 0x83;

        Self {
            state: Rc::new(RefCell::new(State {
                registers,
                pointer: 0,
                selected: false,
                frame: Vec::new(),
                events: Vec::new(),
                accesses: Vec::new(),
                interface_resets: 0,
                fail_next: false,
            })),
        }
    }

    pub fn i2c(&self) -> SimI2c {
        SimI2c { sim: self.clone() }
    }

    pub fn spi(&self) -> SimSpi {
        SimSpi { sim: self.clone() }
    }

    pub fn cs_pin(&self) -> SimPin {
        SimPin {
            sim: self.clone(),
            id: CS_PIN,
        }
    }

    pub fn reset_pin(&self) -> SimPin {
        SimPin {
            sim: self.clone(),
            id: RESET_PIN,
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay { sim: self.clone() }
    }

    /// Set a register without logging an access
    pub fn set_register(&self, register: u8, value: u8) {
        self.state.borrow_mut().registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u8 {
        self.state.borrow().registers[register as usize]
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn accesses(&self) -> Vec<Access> {
        self.state.borrow().accesses.clone()
    }

    /// Forget all events and accesses seen so far
    pub fn clear_log(&self) {
        let mut state = self.state.borrow_mut();
        state.events.clear();
        state.accesses.clear();
    }

    /// Make the next bus operation fail
    pub fn fail_next(&self) {
        self.state.borrow_mut().fail_next = true;
    }

    pub fn interface_resets(&self) -> u32 {
        self.state.borrow().interface_resets
    }

    pub fn chip_selected(&self) -> bool {
        self.state.borrow().selected
    }
}

pub struct SimI2c {
    sim: Sim,
}

impl I2cBus for SimI2c {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.sim.state.borrow_mut();
        state.take_failure()?;
        state.events.push(Event::I2cWrite {
            address,
            data: data.to_vec(),
        });
        if let Some((&register, values)) = data.split_first() {
            state.pointer = register;
            for &value in values {
                let pointer = state.pointer;
                state.write(pointer, value);
                state.pointer = pointer.wrapping_add(1);
            }
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.sim.state.borrow_mut();
        state.take_failure()?;
        state.events.push(Event::I2cWriteRead {
            address,
            write: write_data.to_vec(),
            read_len: read_buf.len(),
        });
        if let Some(&register) = write_data.first() {
            state.pointer = register;
        }
        for byte in read_buf.iter_mut() {
            let pointer = state.pointer;
            *byte = state.read(pointer);
            state.pointer = pointer.wrapping_add(1);
        }
        Ok(())
    }
}

pub struct SimSpi {
    sim: Sim,
}

impl SpiBus for SimSpi {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.sim.state.borrow_mut();
        state.take_failure()?;
        state.events.push(Event::SpiWrite(data.to_vec()));
        if state.selected {
            state.frame.extend_from_slice(data);
        }
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut state = self.sim.state.borrow_mut();
        state.take_failure()?;
        state.events.push(Event::SpiRead(buf.len()));
        let reading = state.selected && state.frame.first() == Some(&(Command::Read as u8));
        for byte in buf.iter_mut() {
            *byte = if reading {
                let pointer = state.pointer;
                state.read(pointer)
            } else {
                0
            };
        }
        Ok(())
    }
}

pub struct SimPin {
    sim: Sim,
    id: u8,
}

impl OutputPin for SimPin {
    fn set_high(&mut self) {
        let mut state = self.sim.state.borrow_mut();
        state.events.push(Event::PinHigh(self.id));
        if self.id == CS_PIN && state.selected {
            state.selected = false;
            state.end_frame();
        }
    }

    fn set_low(&mut self) {
        let mut state = self.sim.state.borrow_mut();
        state.events.push(Event::PinLow(self.id));
        if self.id == CS_PIN {
            state.selected = true;
            state.frame.clear();
        }
    }
}

pub struct SimDelay {
    sim: Sim,
}

impl DelayMs for SimDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.sim.state.borrow_mut().events.push(Event::DelayMs(ms));
    }
}
